//! Pure projection of the lifecycle state into display data.

use crate::coordinator::OperationState;
use crate::models::QueryResult;

/// Rendered in place of a missing amount
pub const MISSING_AMOUNT_SENTINEL: &str = "N/A";

/// Display shape of a settled decision
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionView {
    pub decision: String,
    pub amount: String,
    pub justification: String,
    pub clauses: Vec<String>,
}

/// What the response section should show
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseView {
    Nothing,
    Loading,
    Error(&'static str),
    Decision(DecisionView),
}

/// Project the current state into its display form. Read-only; the state is
/// owned and mutated by the coordinator alone.
pub fn project(state: &OperationState) -> ResponseView {
    match state {
        OperationState::Idle => ResponseView::Nothing,
        OperationState::Pending => ResponseView::Loading,
        OperationState::Failed(failure) => ResponseView::Error(failure.message()),
        OperationState::Succeeded(result) => ResponseView::Decision(decision_view(result)),
    }
}

/// Format a monetary amount to two decimal places with a currency prefix,
/// or the fixed sentinel when absent.
pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("${:.2}", value),
        None => MISSING_AMOUNT_SENTINEL.to_string(),
    }
}

fn decision_view(result: &QueryResult) -> DecisionView {
    DecisionView {
        decision: result.decision.clone(),
        amount: format_amount(result.amount),
        justification: result.justification.clone(),
        clauses: result.clauses_used.clone(),
    }
}
