//! Enum variants that each carry one fixed action string.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrafficSignal {
    Red,
    Orange,
    Green,
}

impl TrafficSignal {
    /// Declaration order.
    pub const ALL: [TrafficSignal; 3] = [
        TrafficSignal::Red,
        TrafficSignal::Orange,
        TrafficSignal::Green,
    ];

    pub fn values() -> impl Iterator<Item = TrafficSignal> {
        Self::ALL.into_iter()
    }

    pub fn name(self) -> &'static str {
        match self {
            TrafficSignal::Red => "RED",
            TrafficSignal::Orange => "ORANGE",
            TrafficSignal::Green => "GREEN",
        }
    }

    pub fn action(self) -> &'static str {
        match self {
            TrafficSignal::Red => "STOP",
            TrafficSignal::Orange => "WAIT",
            TrafficSignal::Green => "GO",
        }
    }

    pub fn describe(self) -> String {
        format!("Signal is: {}, action is : {}", self.name(), self.action())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_in_declaration_order() {
        let pairs: Vec<_> = TrafficSignal::values().map(|s| (s.name(), s.action())).collect();
        assert_eq!(pairs, vec![("RED", "STOP"), ("ORANGE", "WAIT"), ("GREEN", "GO")]);
    }

    #[test]
    fn test_values_are_stable() {
        let first: Vec<_> = TrafficSignal::values().collect();
        let second: Vec<_> = TrafficSignal::values().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_describe() {
        assert_eq!(TrafficSignal::Red.describe(), "Signal is: RED, action is : STOP");
        assert_eq!(TrafficSignal::Green.describe(), "Signal is: GREEN, action is : GO");
    }
}
