//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# dockyard configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[anchor]
# title_bar_height = 18.0   # 0-64, px depth of the tab-bar drop band
# edge_band = 0.25          # 0.05-0.5, depth of the top/bottom/left/right bands
# preview_band = 0.4        # 0.1-0.9, size of the ghost preview

[splitter]
# bar_size = 4.0            # 0-20, px between panes
# leading_ratio = 0.4       # 0.05-0.95, new pane docked top/left
# trailing_ratio = 0.6      # 0.05-0.95, new pane docked bottom/right
# bar_hit_slop = 6.0        # 0-20, px either side of a bar that still grabs it

[floating]
# default_width = 400.0     # 50-4096
# default_height = 300.0    # 50-4096
# move_offset = 20.0        # 0-200
# min_width = 50.0          # 10-1000
# min_height = 50.0         # 10-1000

[persistence]
# layout_file = "/path/to/layout.json"
# restore_on_start = true

[logging]
# level = "info"            # trace, debug, info, warn, error
"##
    .to_string()
}
