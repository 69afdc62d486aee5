//! Window configuration for the desktop app.

use app::APP_NAME;
use core::Map;
use macroquad::window::Conf;

/// Size the window to fit the grid exactly.
pub fn build_window_conf(map: &Map, tile_size: f32) -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: (map.width() as f32 * tile_size).round() as i32,
        window_height: (map.height() as f32 * tile_size).round() as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::build_window_conf;
    use core::{Level, Map};

    #[test]
    fn enables_high_dpi_rendering() {
        let map = Map::new(4, 4);
        assert!(build_window_conf(&map, 30.0).high_dpi);
    }

    #[test]
    fn window_fits_the_builtin_level() {
        let map = Map::load(&Level::builtin().rows).expect("builtin level loads");
        let conf = build_window_conf(&map, 30.0);
        assert_eq!(conf.window_width, 240);
        assert_eq!(conf.window_height, 180);
    }
}
