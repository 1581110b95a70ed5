use bcalc::{evaluate, GeneralFloat};
use wasm_bindgen::prelude::*;

/// Evaluate one line and render it the way the command line does.
#[wasm_bindgen]
pub fn calculate(line: &str) -> String {
    match evaluate(line) {
        Ok(value) => GeneralFloat(value).to_string(),
        Err(diag) => format!("Error: {diag}"),
    }
}
