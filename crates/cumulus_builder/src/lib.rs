//! # cumulus_builder
//!
//! Builder layer for Cumulus templates.
//!
//! This crate turns declarative manifests into core [`cumulus_template`]
//! documents: it translates short resource kinds to fully-qualified type
//! strings, resolves cross-resource references through a session-scoped
//! registry, loads named environment sets, and carries the table of known
//! EC2 instance types.
//!
//! ## Example
//!
//! ```rust
//! use cumulus_builder::{build_template, BuildSession, TemplateManifest};
//! use cumulus_template::OutputFormat;
//!
//! let manifest: TemplateManifest = serde_yaml::from_str(r#"
//! description: A empty template
//! resources:
//!   - kind: ec2_instance
//!     name: MyEC2Instance
//!     properties:
//!       instance_type: t2.micro
//! "#).unwrap();
//!
//! let mut session = BuildSession::new();
//! let template = build_template(&manifest, &mut session).unwrap();
//! let json = template.compile(OutputFormat::Json).unwrap();
//! assert!(json.contains("AWS::EC2::Instance"));
//! ```

pub mod environment;
pub mod error;
pub mod instance_types;
pub mod manifest;
pub mod naming;
pub mod session;

pub use environment::Environments;
pub use error::{BuilderError, BuilderResult};
pub use instance_types::{is_known_instance_type, INSTANCE_TYPES};
pub use manifest::{build_template, ResourceDecl, TemplateManifest};
pub use naming::translate_resource_kind;
pub use session::BuildSession;
