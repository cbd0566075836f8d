/// Display glyph for a weather condition class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    ThunderstormWithRain,
    Lightning,
    Bolt,
    Showers,
    Rain,
    SnowFlurry,
    Snow,
    Fog,
    Tornado,
    Clear,
    FewClouds,
    PartlyCloudy,
    BrokenClouds,
    Overcast,
    Breeze,
    Gale,
    Whirlwind,
    Ice,
    Heat,
    VolcanicAsh,
    Unknown,
}

impl Symbol {
    pub const ALL: [Symbol; 21] = [
        Self::ThunderstormWithRain,
        Self::Lightning,
        Self::Bolt,
        Self::Showers,
        Self::Rain,
        Self::SnowFlurry,
        Self::Snow,
        Self::Fog,
        Self::Tornado,
        Self::Clear,
        Self::FewClouds,
        Self::PartlyCloudy,
        Self::BrokenClouds,
        Self::Overcast,
        Self::Breeze,
        Self::Gale,
        Self::Whirlwind,
        Self::Ice,
        Self::Heat,
        Self::VolcanicAsh,
        Self::Unknown,
    ];

    /// Maps an OpenWeatherMap condition id to its glyph.
    ///
    /// Arms are evaluated top to bottom and the first match wins, so codes
    /// that appear in two ranges of the taxonomy resolve to the earlier arm:
    /// 771 is `Fog`, 962 is `Whirlwind`. Volcanic ash is keyed on 762 and
    /// placed ahead of the atmosphere range. Anything unmatched is `Unknown`.
    pub fn from_code(code: i32) -> Self {
        match code {
            200..=202 | 230..=232 => Self::ThunderstormWithRain,
            210..=211 => Self::Lightning,
            212..=221 => Self::Bolt,
            300..=321 => Self::Showers,
            500..=531 => Self::Rain,
            600..=602 => Self::SnowFlurry,
            603..=622 => Self::Snow,
            // 762 is the taxonomy's volcanic-ash id, inside 701..=771, so it
            // must come first. A volcanic-ash arm on 962 would never fire:
            // the whirlwind arm below already claims 962.
            762 => Self::VolcanicAsh,
            701..=771 => Self::Fog,
            781 | 900 => Self::Tornado,
            800 => Self::Clear,
            801 => Self::FewClouds,
            802 => Self::PartlyCloudy,
            803 => Self::BrokenClouds,
            804 => Self::Overcast,
            952..=956 | 905 => Self::Breeze,
            957..=961 => Self::Gale,
            901 | 902 | 962 => Self::Whirlwind,
            903 => Self::Ice,
            904 => Self::Heat,
            _ => Self::Unknown,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::ThunderstormWithRain => "⛈",
            Self::Lightning => "🌩",
            Self::Bolt => "⚡️",
            Self::Showers => "🌦",
            Self::Rain => "🌧",
            Self::SnowFlurry => "☃️",
            Self::Snow => "🌨",
            Self::Fog => "🌫",
            Self::Tornado => "🌪",
            Self::Clear => "☀️",
            Self::FewClouds => "🌤",
            Self::PartlyCloudy => "⛅️",
            Self::BrokenClouds => "🌥",
            Self::Overcast => "☁️",
            Self::Breeze => "🌬",
            Self::Gale => "💨",
            Self::Whirlwind => "🌀",
            Self::Ice => "❄️",
            Self::Heat => "🌡",
            Self::VolcanicAsh => "🌋",
            Self::Unknown => "❓",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
