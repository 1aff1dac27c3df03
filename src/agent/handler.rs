use super::Intent;
use super::calc::{self, Number};
use super::templates;
use crate::config::FallbackMode;
use crate::utils::text::truncate_with_ellipsis;

use rand::Rng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Longest prefix of the user's text echoed back by the fallback reply.
pub const ECHO_LIMIT: usize = 100;

pub trait IntentHandler: Send + Sync {
    fn intent(&self) -> Intent;
    /// `lowered` is the user's text already lower-cased.
    fn matches(&self, lowered: &str) -> bool;
    /// `input` is the user's text as typed.
    fn respond(&self, input: &str) -> String;
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

pub struct CalculationHandler;
pub struct CodeHandler;
pub struct TranslationHandler;
pub struct PlanningHandler;
pub struct ContentCreationHandler;
pub struct AnalysisHandler;
pub struct HelpHandler;
pub struct GeneralHandler {
    mode: FallbackMode,
}

impl IntentHandler for CalculationHandler {
    fn intent(&self) -> Intent {
        Intent::Calculation
    }

    fn matches(&self, lowered: &str) -> bool {
        contains_any(lowered, &["calculate", "math"]) || calc::contains_expression(lowered)
    }

    fn respond(&self, input: &str) -> String {
        match calc::evaluate(input) {
            Some(calculation) => {
                tracing::debug!(
                    lhs = calculation.lhs,
                    operator = ?calculation.operator,
                    rhs = calculation.rhs,
                    "evaluated expression"
                );
                templates::calculation_result(Number(calculation.result))
            }
            None => templates::CALCULATION_HELP.to_string(),
        }
    }
}

impl IntentHandler for CodeHandler {
    fn intent(&self) -> Intent {
        Intent::Code
    }

    fn matches(&self, lowered: &str) -> bool {
        contains_any(lowered, &["code", "program", "function"])
    }

    fn respond(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        if lowered.contains("python") {
            templates::CODE_PYTHON.to_string()
        } else if contains_any(&lowered, &["javascript", "js"]) {
            templates::CODE_JAVASCRIPT.to_string()
        } else {
            templates::CODE_MENU.to_string()
        }
    }
}

impl IntentHandler for TranslationHandler {
    fn intent(&self) -> Intent {
        Intent::Translation
    }

    fn matches(&self, lowered: &str) -> bool {
        lowered.contains("translate")
    }

    fn respond(&self, _input: &str) -> String {
        templates::TRANSLATION.to_string()
    }
}

impl IntentHandler for PlanningHandler {
    fn intent(&self) -> Intent {
        Intent::Planning
    }

    fn matches(&self, lowered: &str) -> bool {
        contains_any(lowered, &["schedule", "plan", "organize"])
    }

    fn respond(&self, _input: &str) -> String {
        templates::PLANNING.to_string()
    }
}

impl IntentHandler for ContentCreationHandler {
    fn intent(&self) -> Intent {
        Intent::ContentCreation
    }

    fn matches(&self, lowered: &str) -> bool {
        contains_any(lowered, &["write", "create", "generate"])
    }

    fn respond(&self, input: &str) -> String {
        if input.to_lowercase().contains("email") {
            templates::EMAIL.to_string()
        } else {
            templates::CONTENT_MENU.to_string()
        }
    }
}

impl IntentHandler for AnalysisHandler {
    fn intent(&self) -> Intent {
        Intent::Analysis
    }

    fn matches(&self, lowered: &str) -> bool {
        contains_any(lowered, &["analyze", "data"])
    }

    fn respond(&self, _input: &str) -> String {
        templates::ANALYSIS.to_string()
    }
}

impl IntentHandler for HelpHandler {
    fn intent(&self) -> Intent {
        Intent::Help
    }

    fn matches(&self, lowered: &str) -> bool {
        contains_any(lowered, &["help", "how"])
    }

    fn respond(&self, _input: &str) -> String {
        templates::HELP.to_string()
    }
}

impl GeneralHandler {
    pub fn new(mode: FallbackMode) -> Self {
        Self { mode }
    }

    fn pick_variant(&self, input: &str) -> usize {
        match self.mode {
            FallbackMode::Random => rand::thread_rng().gen_range(0..templates::GENERAL_VARIANTS),
            FallbackMode::Hashed => {
                let mut hasher = DefaultHasher::new();
                input.hash(&mut hasher);
                (hasher.finish() % templates::GENERAL_VARIANTS as u64) as usize
            }
        }
    }
}

impl IntentHandler for GeneralHandler {
    fn intent(&self) -> Intent {
        Intent::General
    }

    fn matches(&self, _lowered: &str) -> bool {
        true
    }

    fn respond(&self, input: &str) -> String {
        let echo = truncate_with_ellipsis(input, ECHO_LIMIT);
        templates::general(self.pick_variant(input), &echo)
    }
}
