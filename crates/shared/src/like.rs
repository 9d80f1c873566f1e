use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

#[derive(EnumString, Display, AsRefStr, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Post,
    Comment,
}

/// The entity a like event points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Post(String),
    Comment(String),
}

impl Target {
    pub fn kind(&self) -> TargetKind {
        match self {
            Target::Post(_) => TargetKind::Post,
            Target::Comment(_) => TargetKind::Comment,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Target::Post(id) | Target::Comment(id) => id,
        }
    }
}
