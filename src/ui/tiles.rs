use walkers::{
    TileId,
    sources::{Attribution, TileSource},
};

use crate::config::TileConfig;

/// A slippy-map tile server described by a `{z}/{x}/{y}` url template.
#[derive(Clone, Copy)]
pub(crate) struct TemplateTiles {
    url_template: &'static str,
    attribution: &'static str,
    attribution_url: &'static str,
    max_zoom: u8,
}

impl TemplateTiles {
    pub(crate) fn from_config(config: &TileConfig) -> Self {
        Self {
            url_template: config.url_template,
            attribution: config.attribution,
            attribution_url: config.attribution_url,
            max_zoom: config.max_zoom,
        }
    }
}

pub(crate) fn expand_tile_template(template: &str, zoom: u8, x: u32, y: u32) -> String {
    template
        .replace("{z}", &zoom.to_string())
        .replace("{x}", &x.to_string())
        .replace("{y}", &y.to_string())
}

impl TileSource for TemplateTiles {
    fn tile_url(&self, tile_id: TileId) -> String {
        expand_tile_template(self.url_template, tile_id.zoom, tile_id.x, tile_id.y)
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: self.attribution,
            url: self.attribution_url,
            logo_light: None,
            logo_dark: None,
        }
    }

    fn max_zoom(&self) -> u8 {
        self.max_zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAP;

    #[test]
    fn expands_osm_template() {
        assert_eq!(
            expand_tile_template(MAP.tiles.url_template, 5, 16, 8),
            "https://tile.openstreetmap.org/5/16/8.png"
        );
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        assert_eq!(expand_tile_template("https://x/tile.png", 1, 2, 3), "https://x/tile.png");
    }
}
