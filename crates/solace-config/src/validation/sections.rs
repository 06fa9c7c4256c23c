//! Per-section validators.

use crate::schema::{SolaceConfig, LOG_LEVELS};

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

pub(crate) fn validate_model(errors: &mut Vec<String>, config: &SolaceConfig) {
    let model = &config.model;
    validate_non_empty(errors, "model.name", &model.name);
    validate_non_empty(errors, "model.api_key_env", &model.api_key_env);
    validate_range_f64(errors, "model.temperature", model.temperature, 0.0, 2.0);
    validate_range(
        errors,
        "model.max_output_tokens",
        model.max_output_tokens,
        1,
        65536,
    );
    validate_range(
        errors,
        "model.connect_timeout_secs",
        model.connect_timeout_secs,
        1,
        120,
    );
}

pub(crate) fn validate_persona(errors: &mut Vec<String>, config: &SolaceConfig) {
    let persona = &config.persona;
    validate_non_empty(errors, "persona.system_instruction", &persona.system_instruction);
    validate_non_empty(errors, "persona.greeting", &persona.greeting);
    validate_non_empty(
        errors,
        "persona.init_failure_message",
        &persona.init_failure_message,
    );
    validate_non_empty(
        errors,
        "persona.send_failure_message",
        &persona.send_failure_message,
    );
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &SolaceConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 3840);
    validate_range(errors, "window.height", config.window.height, 400, 2160);
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &SolaceConfig) {
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
