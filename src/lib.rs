//! Prtcl - Terraform remote-state bootstrap and run wrapper.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── setup         # Remote-state backend bootstrap
//! │   ├── run           # Terraform wrapper with credential injection
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .prtcl.toml and project-root discovery
//!     ├── creds         # Credential resolution (ambient / aws cli export)
//!     ├── identity      # STS caller-identity checks
//!     ├── backend       # backend.hcl template rendering
//!     ├── invoke        # External tool invocation
//!     └── proc          # Bounded child-process execution
//! ```
//!
//! # Features
//!
//! - Credential discovery from the environment or `aws configure
//!   export-credentials`, applied as an explicit overlay at spawn time
//! - Account-scoped `backend.hcl` generation from per-environment templates
//! - Non-interactive `terraform apply`/`destroy` with automatic
//!   `-auto-approve` injection
//! - Exit-code passthrough from the wrapped tool

pub mod cli;
pub mod core;
pub mod error;
