//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# regform configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[logging]
# level = "info"           # trace, debug, info, warn, error

[form]
# Clear the profile and cover previews when the form is cancelled/reset.
# reset_clears_images = false

[notifications]
# capacity = 8             # 1-64
# ttl_secs = 5             # 1-60

[events]
# capacity = 64            # 1-1024
"##
}
