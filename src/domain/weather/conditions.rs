#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Drizzle,
    Snow,
    Mist,
    Smoke,
    Haze,
    Dust,
    Fog,
    Sand,
    Tornado,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionDescriptor {
    pub label: &'static str,
    pub image_key: &'static str,
}

const CONDITIONS: &[(Condition, &str, &str)] = &[
    (Condition::Clear, "Clear", "Clear"),
    (Condition::Clouds, "Clouds", "Cloudy"),
    (Condition::Rain, "Rain", "Rainy"),
    (Condition::Thunderstorm, "Thunderstorm", "Thunderstorm"),
    (Condition::Drizzle, "Drizzle", "Drizzle"),
    (Condition::Snow, "Snow", "Snowy"),
    (Condition::Mist, "Mist", "Misty"),
    (Condition::Smoke, "Smoke", "Smoky"),
    (Condition::Haze, "Haze", "Hazy"),
    (Condition::Dust, "Dust", "Dusty"),
    (Condition::Fog, "Fog", "Foggy"),
    (Condition::Sand, "Sand", "Sandy"),
    (Condition::Tornado, "Tornado", "Tornado"),
];

impl Condition {
    /// Maps the API's `weather[0].main` key. Anything unrecognised renders as `Clear`.
    #[must_use]
    pub fn from_main(main: &str) -> Self {
        CONDITIONS
            .iter()
            .find_map(|(condition, key, _)| (*key == main).then_some(*condition))
            .unwrap_or(Condition::Clear)
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        self.entry().1
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.entry().2
    }

    #[must_use]
    pub fn descriptor(self) -> ConditionDescriptor {
        let (_, key, label) = self.entry();
        ConditionDescriptor {
            label,
            image_key: key,
        }
    }

    fn entry(self) -> (Condition, &'static str, &'static str) {
        CONDITIONS
            .iter()
            .copied()
            .find(|(condition, _, _)| *condition == self)
            .unwrap_or(CONDITIONS[0])
    }
}

#[must_use]
pub fn describe_condition(main: &str) -> ConditionDescriptor {
    Condition::from_main(main).descriptor()
}
