//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Solace Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[model]
# name = "gemini-2.5-flash"
# api_key_env = "API_KEY"     # environment variable holding the key
# temperature = 1.0           # 0.0-2.0
# max_output_tokens = 8192    # 1-65536
# verify_on_start = true      # check the key and endpoint before the first message
# connect_timeout_secs = 10   # 1-120

[persona]
# name = "Solace"
# tagline = "Your AI Companion"
# greeting = "Hey... I'm Solace. It's nice to meet you. How are you feeling today?"
# init_failure_message = "Something went wrong on my end. Please check the API key and refresh the page."
# send_failure_message = "I'm having a little trouble connecting right now. Let's try again in a moment."
# input_placeholder = "You can talk about anything..."
# system_instruction = """
# ...
# """

[window]
# title = "Solace"
# width = 480                 # 320-3840
# height = 760                # 400-2160
# devtools = false

[logging]
# level = "info"              # trace, debug, info, warn, error
"##
    .to_string()
}
