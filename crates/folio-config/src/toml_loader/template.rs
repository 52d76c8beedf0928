//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# folio configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[backdrop]
# enabled = true
# point_count = 2000       # 0-200000
# inner_radius = 5.0
# outer_radius = 15.0      # must be greater than inner_radius
# rotation_speed_x = 0.05  # radians per second
# rotation_speed_y = 0.02
# color = "#3b82f6"
# point_size = 0.02
# opacity = 0.6            # 0.0-1.0
# seed = 42                # omit for a fresh cloud on every mount

[parallax]
# enabled = true
# from_percent = 0.0       # -100 to 100
# to_percent = 50.0

[camera]
# distance = 5.0
# fov = 75.0               # degrees, 1-179
# near = 0.1
# far = 1000.0
# auto_rotate = true
# auto_rotate_speed = 0.5  # 2.0 = one orbit every 30 seconds

[hero]
# enabled = true
# node_count = 20          # 0-1000
# extent = [4.0, 4.0, 2.0]
# spin_speed = 0.1
# wobble_amplitude = 0.1
# wobble_frequency = 0.1
# color = "#60a5fa"
# node_radius = 0.05

[reveal]
# enabled = true
# margin = 100.0           # px inside the viewport before a section reveals
# duration = 0.8           # seconds
# stagger = 0.1            # seconds between list items

[performance]
# frame_rate = 60          # 1-240
# frame_budget_ms = 1.0

[logging]
# level = "INFO"           # TRACE, DEBUG, INFO, WARNING, ERROR

[content]
# path = "assets/content.toml"
# show_certifications = true
"##
    .to_string()
}
