//! Genfarm Common Library
//!
//! CLIとWeb(WASM)で共有される型と状態遷移

pub mod types;
pub mod error;
pub mod acquisition;
pub mod presentation;
pub mod protocol;
pub mod session;

pub use types::{AnalysisResult, HEALTHY_STATUS, NO_DISEASE};
pub use error::{Error, Result};
pub use acquisition::{ImageAcquisition, ImageSource, MemoryImage};
pub use presentation::{Branch, ResultView};
pub use protocol::{Analyzer, AnalyzeRequest, ServiceConfig, interpret_response};
pub use session::{Notification, NotificationKind, Phase, RequestToken, Session, SessionView};
