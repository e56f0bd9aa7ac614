//! Built-in park catalog
//!
//! The default configuration ships these eight attractions and five zones. A JSON
//! configuration file may replace either list.

use super::attraction::{AttractionSpec, CameraFeed, MapPosition};
use super::zone::ZoneSpec;
use crate::types::{AttractionId, AttractionStatus, CameraPurpose, LocalizedText, ZoneId};

/// Demo stream shown for every built-in camera
pub const DEFAULT_STREAM_URL: &str = "https://www.youtube.com/watch?v=m15UeZ_WtHk";

/// The five built-in zones
pub fn default_zones() -> Vec<ZoneSpec> {
    [
        ("thrill", "冒险区", "Adventure Zone", 3000),
        ("family", "亲子区", "Kids Zone", 4000),
        ("scenic", "观光区", "Scenic Zone", 2500),
        ("food", "美食广场", "Food Court", 2000),
        ("entrance", "入口广场", "Entry Plaza", 3000),
    ]
    .into_iter()
    .map(|(id, zh, en, capacity)| ZoneSpec::new(id, LocalizedText::new(zh, en), capacity))
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn attraction(
    id: &str,
    zh: &str,
    en: &str,
    icon: &str,
    zone: &str,
    capacity: u32,
    throughput_per_hour: u32,
    (x, y): (f64, f64),
    purpose: CameraPurpose,
) -> AttractionSpec {
    AttractionSpec {
        id: AttractionId::new(id),
        name: LocalizedText::new(zh, en),
        icon: icon.to_string(),
        zone: ZoneId::new(zone),
        capacity,
        status: AttractionStatus::Operating,
        throughput_per_hour,
        position: MapPosition::new(x, y),
        camera: Some(CameraFeed { stream_url: DEFAULT_STREAM_URL.to_string(), purpose }),
    }
}

/// The eight built-in attractions
pub fn default_attractions() -> Vec<AttractionSpec> {
    use CameraPurpose::{Crowd, Queue, Safety};

    vec![
        attraction("coaster", "高空过山车", "Sky Coaster", "🎢", "thrill", 24, 720, (25.0, 20.0), Queue),
        attraction("carousel", "旋转木马", "Carousel", "🎠", "family", 48, 960, (60.0, 65.0), Queue),
        attraction("ferris", "星空摩天轮", "Starlight Wheel", "🎡", "scenic", 120, 480, (78.0, 30.0), Crowd),
        attraction("splash", "激流勇进", "River Rapids", "🌊", "thrill", 20, 600, (15.0, 55.0), Queue),
        attraction("haunted", "幽灵古堡", "Haunted Castle", "🏰", "thrill", 30, 540, (40.0, 35.0), Safety),
        attraction("teacup", "疯狂茶杯", "Spinning Teacups", "🍵", "family", 36, 720, (50.0, 80.0), Queue),
        attraction("pirate", "海盗船", "Pirate Ship", "🏴‍☠️", "thrill", 40, 800, (35.0, 70.0), Queue),
        attraction("bumper", "碰碰车", "Bumper Cars", "🚗", "family", 20, 400, (70.0, 50.0), Crowd),
    ]
}
