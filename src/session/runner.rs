//! Drives a session through a prompter
//!
//! Asks for the budget and the fixed expenses, loops on extra expenses while
//! the user confirms, then presents the outcome message.

use tracing::{debug, info, warn};

use super::state::{BudgetSession, BudgetSummary};
use crate::config::Settings;
use crate::error::BudgetResult;
use crate::prompt::{ask_money, dialog::APP_TITLE, Prompter};

pub const BUDGET_PROMPT: &str = "What is your monthly budget?";
pub const MORE_EXPENSES_PROMPT: &str = "Do you have additional expenses?";
pub const EXTRA_EXPENSE_PROMPT: &str = "Enter an extra expense:";

/// Run one full session and present its outcome
///
/// Any numeric prompt that fails (malformed reply after the allowed
/// attempts, or dismissal) aborts the run before the outcome is shown.
pub fn run_session<P: Prompter + ?Sized>(
    prompter: &mut P,
    settings: &Settings,
) -> BudgetResult<BudgetSummary> {
    let attempts = settings.attempts_per_prompt();

    let budget = ask_money(prompter, BUDGET_PROMPT, attempts)?;
    let mut session = BudgetSession::new(budget);

    while let Some(category) = session.next_fixed_category() {
        let amount = ask_money(prompter, category.prompt(), attempts)?;
        session.record_fixed(amount)?;
    }

    loop {
        if let Some(limit) = settings.max_extra_expenses {
            if session.extra_count() >= limit {
                warn!(limit, "Extra expense limit reached, not asking for more");
                break;
            }
        }

        let answer = prompter.confirm(MORE_EXPENSES_PROMPT, APP_TITLE)?;
        debug!(?answer, "More expenses?");
        if !answer.is_yes() {
            break;
        }

        let amount = ask_money(prompter, EXTRA_EXPENSE_PROMPT, attempts)?;
        session.record_extra(amount)?;
    }

    let summary = session.evaluate()?;
    prompter.show_message(&summary.message(&settings.currency_symbol))?;
    session.terminate()?;

    info!(
        total = %summary.total,
        outcome = summary.outcome.kind(),
        extras = session.extra_count(),
        "Session complete"
    );
    Ok(summary)
}

/// Run a session on an owned prompter and drop it before returning
///
/// Prompters that take over the terminal restore it on drop, so anything
/// the caller prints about the result lands on the normal screen.
pub fn run_and_release<P: Prompter>(
    mut prompter: P,
    settings: &Settings,
) -> BudgetResult<BudgetSummary> {
    let result = run_session(&mut prompter, settings);
    drop(prompter);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InvalidInputPolicy;
    use crate::error::BudgetError;
    use crate::models::{BudgetOutcome, Money};
    use crate::prompt::{Confirmation, ScriptedPrompter};
    use std::cell::Cell;
    use std::rc::Rc;

    const NO_EXTRAS: [&str; 0] = [];

    fn dollars(d: i64) -> Money {
        Money::from_dollars(d)
    }

    #[test]
    fn test_scenario_under_budget() {
        let mut prompter = ScriptedPrompter::for_run("1000", ["300", "100", "200"], NO_EXTRAS);
        let summary = run_session(&mut prompter, &Settings::default()).unwrap();

        assert_eq!(summary.total, dollars(600));
        assert_eq!(
            prompter.messages(),
            ["You are under budget by $400.00\nTotal monthly expenses = $600.00"]
        );
    }

    #[test]
    fn test_scenario_over_budget() {
        let mut prompter = ScriptedPrompter::for_run("500", ["300", "150", "100"], NO_EXTRAS);
        let summary = run_session(&mut prompter, &Settings::default()).unwrap();

        assert_eq!(summary.outcome, BudgetOutcome::OverBudget { deficit: dollars(50) });
        assert_eq!(
            prompter.messages(),
            ["You are over budget by $50.00\nTotal monthly expenses = $550.00"]
        );
    }

    #[test]
    fn test_scenario_on_budget() {
        let mut prompter = ScriptedPrompter::for_run("600", ["300", "150", "150"], NO_EXTRAS);
        run_session(&mut prompter, &Settings::default()).unwrap();

        assert_eq!(
            prompter.messages(),
            ["You are on budget. Total expenses = $600.00"]
        );
    }

    #[test]
    fn test_scenario_with_extra_expense() {
        let mut prompter = ScriptedPrompter::for_run("1000", ["200", "100", "100"], ["100"]);
        let summary = run_session(&mut prompter, &Settings::default()).unwrap();

        assert_eq!(summary.total, dollars(500));
        assert_eq!(summary.outcome, BudgetOutcome::UnderBudget { surplus: dollars(500) });
        assert_eq!(
            prompter.asked(),
            [
                BUDGET_PROMPT,
                "Enter housing expenses:",
                "Enter Travel expenses:",
                "Enter Mess expenses:",
                MORE_EXPENSES_PROMPT,
                EXTRA_EXPENSE_PROMPT,
                MORE_EXPENSES_PROMPT,
            ]
        );
    }

    #[test]
    fn test_cancel_ends_extra_loop() {
        let mut prompter = ScriptedPrompter::new(
            ["100", "10", "10", "10", "5"],
            &[Confirmation::Yes, Confirmation::Cancelled, Confirmation::Yes],
        );
        let summary = run_session(&mut prompter, &Settings::default()).unwrap();
        assert_eq!(summary.total, dollars(35));
        assert_eq!(prompter.messages().len(), 1);
    }

    #[test]
    fn test_invalid_budget_aborts_before_message() {
        let mut prompter = ScriptedPrompter::for_run("lots", ["1", "2", "3"], NO_EXTRAS);
        let err = run_session(&mut prompter, &Settings::default()).unwrap_err();

        assert!(matches!(err, BudgetError::InvalidNumberFormat { ref input } if input == "lots"));
        assert!(prompter.messages().is_empty());
        assert_eq!(prompter.asked(), [BUDGET_PROMPT]);
    }

    #[test]
    fn test_invalid_extra_aborts() {
        let mut prompter = ScriptedPrompter::for_run("100", ["1", "2", "3"], ["oops"]);
        let err = run_session(&mut prompter, &Settings::default()).unwrap_err();
        assert!(err.is_invalid_number());
        assert!(prompter.messages().is_empty());
    }

    #[test]
    fn test_retry_policy_recovers() {
        let settings = Settings {
            on_invalid_input: InvalidInputPolicy::Retry,
            ..Settings::default()
        };
        let mut prompter =
            ScriptedPrompter::new(["abc", "1000", "300", "100", "200"], &[Confirmation::No]);
        let summary = run_session(&mut prompter, &settings).unwrap();

        assert_eq!(summary.budget, dollars(1000));
        assert_eq!(prompter.messages().len(), 2);
        assert!(prompter.messages()[1].starts_with("You are under budget by $400.00"));
    }

    #[test]
    fn test_extra_limit_stops_loop() {
        let settings = Settings {
            max_extra_expenses: Some(2),
            ..Settings::default()
        };
        let mut prompter =
            ScriptedPrompter::for_run("100", ["0", "0", "0"], ["1", "2", "3"]);
        let summary = run_session(&mut prompter, &settings).unwrap();

        assert_eq!(summary.total, dollars(3));
        assert_eq!(summary.expenses.iter().filter(|e| e.is_extra()).count(), 2);
        assert_eq!(prompter.remaining_replies(), 1);
    }

    #[test]
    fn test_no_limit_by_default() {
        let extras: Vec<String> = (1..=12).map(|i| i.to_string()).collect();
        let mut prompter = ScriptedPrompter::for_run(
            "100".to_string(),
            ["0".to_string(), "0".to_string(), "0".to_string()],
            extras,
        );
        let summary = run_session(&mut prompter, &Settings::default()).unwrap();

        assert_eq!(summary.expenses.iter().filter(|e| e.is_extra()).count(), 12);
        assert_eq!(summary.total, dollars(78));
        assert_eq!(prompter.remaining_replies(), 0);
    }

    #[test]
    fn test_batch_settings_keep_replies_aligned() {
        let settings = Settings {
            on_invalid_input: InvalidInputPolicy::Retry,
            ..Settings::default()
        };
        let mut prompter = ScriptedPrompter::for_run("abc", ["300", "100", "200"], ["50"]);
        let err = run_session(&mut prompter, &settings.for_batch()).unwrap_err();

        assert!(matches!(err, BudgetError::InvalidNumberFormat { ref input } if input == "abc"));
        assert_eq!(prompter.asked(), [BUDGET_PROMPT]);
    }

    struct ReleaseTracker {
        inner: ScriptedPrompter,
        released: Rc<Cell<bool>>,
    }

    impl Prompter for ReleaseTracker {
        fn ask_text(&mut self, prompt: &str) -> BudgetResult<Option<String>> {
            assert!(!self.released.get());
            self.inner.ask_text(prompt)
        }

        fn confirm(&mut self, prompt: &str, title: &str) -> BudgetResult<Confirmation> {
            self.inner.confirm(prompt, title)
        }

        fn show_message(&mut self, message: &str) -> BudgetResult<()> {
            self.inner.show_message(message)
        }
    }

    impl Drop for ReleaseTracker {
        fn drop(&mut self) {
            self.released.set(true);
        }
    }

    #[test]
    fn test_run_and_release_drops_prompter_on_abort() {
        let released = Rc::new(Cell::new(false));
        let prompter = ReleaseTracker {
            inner: ScriptedPrompter::for_run("oops", ["1", "2", "3"], NO_EXTRAS),
            released: Rc::clone(&released),
        };

        let err = run_and_release(prompter, &Settings::default()).unwrap_err();
        assert!(err.is_invalid_number());
        assert!(released.get());
    }

    #[test]
    fn test_negative_expenses_accepted() {
        let mut prompter = ScriptedPrompter::for_run("100", ["-50", "20", "30"], NO_EXTRAS);
        let summary = run_session(&mut prompter, &Settings::default()).unwrap();
        assert_eq!(summary.total, Money::zero());
    }

    #[test]
    fn test_currency_symbol_from_settings() {
        let settings = Settings {
            currency_symbol: "€".into(),
            ..Settings::default()
        };
        let mut prompter = ScriptedPrompter::for_run("600", ["300", "150", "150"], NO_EXTRAS);
        run_session(&mut prompter, &settings).unwrap();
        assert_eq!(prompter.messages(), ["You are on budget. Total expenses = €600.00"]);
    }

    #[test]
    fn test_dismissed_number_prompt_aborts() {
        let mut prompter = ScriptedPrompter::new(["100", "1"], &[]);
        let err = run_session(&mut prompter, &Settings::default()).unwrap_err();
        assert!(err.is_dismissed());
    }
}
