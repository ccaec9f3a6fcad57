use crate::core::frame::parse_team_color;
use crate::interfaces::gui_interface::RgbColor;

/// TrackInfo describes one selectable race track.
#[derive(Debug, Clone, Copy)]
pub struct TrackInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
}

/// DriverInfo describes one driver of the field with his static team affiliation and color.
#[derive(Debug, Clone, Copy)]
pub struct DriverInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub team: &'static str,
    pub color: &'static str,
}

/// Seasons selectable on the setup screen, newest first.
pub const YEARS: [u32; 7] = [2024, 2023, 2022, 2021, 2020, 2019, 2018];

/// Tracks selectable on the setup screen.
pub const TRACKS: [TrackInfo; 20] = [
    TrackInfo { id: "bahrain", name: "Bahrain International Circuit", country: "Bahrain" },
    TrackInfo { id: "jeddah", name: "Jeddah Corniche Circuit", country: "Saudi Arabia" },
    TrackInfo { id: "melbourne", name: "Albert Park Circuit", country: "Australia" },
    TrackInfo { id: "suzuka", name: "Suzuka International Racing Course", country: "Japan" },
    TrackInfo { id: "shanghai", name: "Shanghai International Circuit", country: "China" },
    TrackInfo { id: "miami", name: "Miami International Autodrome", country: "USA" },
    TrackInfo { id: "imola", name: "Autodromo Enzo e Dino Ferrari", country: "Italy" },
    TrackInfo { id: "monaco", name: "Circuit de Monaco", country: "Monaco" },
    TrackInfo { id: "montreal", name: "Circuit Gilles Villeneuve", country: "Canada" },
    TrackInfo { id: "barcelona", name: "Circuit de Barcelona-Catalunya", country: "Spain" },
    TrackInfo { id: "spielberg", name: "Red Bull Ring", country: "Austria" },
    TrackInfo { id: "silverstone", name: "Silverstone Circuit", country: "Great Britain" },
    TrackInfo { id: "budapest", name: "Hungaroring", country: "Hungary" },
    TrackInfo { id: "spa", name: "Circuit de Spa-Francorchamps", country: "Belgium" },
    TrackInfo { id: "zandvoort", name: "Circuit Zandvoort", country: "Netherlands" },
    TrackInfo { id: "monza", name: "Autodromo Nazionale Monza", country: "Italy" },
    TrackInfo { id: "singapore", name: "Marina Bay Street Circuit", country: "Singapore" },
    TrackInfo { id: "austin", name: "Circuit of the Americas", country: "USA" },
    TrackInfo { id: "mexico", name: "Autodromo Hermanos Rodriguez", country: "Mexico" },
    TrackInfo { id: "abudhabi", name: "Yas Marina Circuit", country: "Abu Dhabi" },
];

/// Full driver field used by the demo generator and as color lookup for payloads that omit
/// colors.
pub const ALL_DRIVERS: [DriverInfo; 20] = [
    DriverInfo { id: "VER", name: "Max Verstappen", team: "Red Bull Racing", color: "#3671C6" },
    DriverInfo { id: "PER", name: "Sergio Perez", team: "Red Bull Racing", color: "#3671C6" },
    DriverInfo { id: "LEC", name: "Charles Leclerc", team: "Ferrari", color: "#F91536" },
    DriverInfo { id: "SAI", name: "Carlos Sainz", team: "Ferrari", color: "#F91536" },
    DriverInfo { id: "HAM", name: "Lewis Hamilton", team: "Mercedes", color: "#6CD3BF" },
    DriverInfo { id: "RUS", name: "George Russell", team: "Mercedes", color: "#6CD3BF" },
    DriverInfo { id: "NOR", name: "Lando Norris", team: "McLaren", color: "#F58020" },
    DriverInfo { id: "PIA", name: "Oscar Piastri", team: "McLaren", color: "#F58020" },
    DriverInfo { id: "ALO", name: "Fernando Alonso", team: "Aston Martin", color: "#358C75" },
    DriverInfo { id: "STR", name: "Lance Stroll", team: "Aston Martin", color: "#358C75" },
    DriverInfo { id: "GAS", name: "Pierre Gasly", team: "Alpine", color: "#2293D1" },
    DriverInfo { id: "OCO", name: "Esteban Ocon", team: "Alpine", color: "#2293D1" },
    DriverInfo { id: "ALB", name: "Alexander Albon", team: "Williams", color: "#37BEDD" },
    DriverInfo { id: "SAR", name: "Logan Sargeant", team: "Williams", color: "#37BEDD" },
    DriverInfo { id: "TSU", name: "Yuki Tsunoda", team: "RB", color: "#5E8FAA" },
    DriverInfo { id: "RIC", name: "Daniel Ricciardo", team: "RB", color: "#5E8FAA" },
    DriverInfo { id: "BOT", name: "Valtteri Bottas", team: "Sauber", color: "#C92D4B" },
    DriverInfo { id: "ZHO", name: "Guanyu Zhou", team: "Sauber", color: "#C92D4B" },
    DriverInfo { id: "MAG", name: "Kevin Magnussen", team: "Haas", color: "#B6BABD" },
    DriverInfo { id: "HUL", name: "Nico Hulkenberg", team: "Haas", color: "#B6BABD" },
];

/// driver_info returns the static roster entry for a driver id, if known.
pub fn driver_info(driver_id: &str) -> Option<&'static DriverInfo> {
    ALL_DRIVERS.iter().find(|d| d.id == driver_id)
}

/// team_color returns the parsed team color for a driver id (fallback grey for unknown drivers).
pub fn team_color(driver_id: &str) -> RgbColor {
    match driver_info(driver_id) {
        Some(d) => parse_team_color(d.color),
        None => parse_team_color(""),
    }
}
