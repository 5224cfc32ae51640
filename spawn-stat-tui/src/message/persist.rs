//! Save / Load 消息

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistMessage {
    Save,
    Load,
}
