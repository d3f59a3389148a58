use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operands {
    pub a: i32,
    pub b: i32,
}

impl Operands {
    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }
}

/// 一次乘法的完整結果，用於 JSON 輸出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub operands: Operands,
    pub result: i64,
}
