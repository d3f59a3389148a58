use crate::config::OutputFormat;
use crate::core::math_operations::MathOperations;
use crate::domain::model::{Operands, Product};
use crate::domain::ports::DigitSource;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Multiply { a: i32, b: i32 },
    Random { rounds: usize },
    Digit { count: usize },
}

pub struct Runner<S: DigitSource> {
    operations: MathOperations<S>,
    format: OutputFormat,
}

impl<S: DigitSource> Runner<S> {
    pub fn new(operations: MathOperations<S>, format: OutputFormat) -> Self {
        Self { operations, format }
    }

    /// 執行單一任務，結果寫入 `out`。錯誤直接回傳給呼叫端。
    pub fn run<W: Write>(&mut self, task: Task, out: &mut W) -> Result<()> {
        tracing::debug!("Running task: {:?}", task);

        match task {
            Task::Multiply { a, b } => {
                let result = self.operations.multiply_if_positive(a, b)?;
                self.write_product(
                    out,
                    &Product {
                        operands: Operands::new(a, b),
                        result,
                    },
                )?;
            }
            Task::Random { rounds } => {
                for round in 1..=rounds {
                    let product = self.operations.multiply_two_random_numbers_detailed()?;
                    tracing::debug!("Round {}/{} done", round, rounds);
                    self.write_product(out, &product)?;
                }
            }
            Task::Digit { count } => {
                for _ in 0..count {
                    let digit = self.operations.generate_random_digit();
                    match self.format {
                        OutputFormat::Text => writeln!(out, "{}", digit)?,
                        OutputFormat::Json => {
                            serde_json::to_writer(&mut *out, &serde_json::json!({ "digit": digit }))?;
                            writeln!(out)?;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn write_product<W: Write>(&self, out: &mut W, product: &Product) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(
                out,
                "{} * {} = {}",
                product.operands.a, product.operands.b, product.result
            )?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, product)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
