use crate::notify::Notifier;
use texty_config::AppConfig;

pub mod completions;
pub mod convert;
pub mod phones;

pub struct Context<'a> {
    pub config: &'a AppConfig,
    pub notifier: &'a dyn Notifier,
}
