use serde::{Deserialize, Serialize};

// Portion size of an order item
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity{
    S,
    M,
    L
}

impl Quantity{
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L"
        }
    }
}
