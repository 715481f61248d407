use super::*;

mod date_and_quotes;
mod theme_and_skills;
mod trace_and_errors;
