//! Cross-page notification bus: typed change topics plus the default
//! date the quick-add form should propose. Subscribers list a topic's
//! stamp as an effect dependency and re-fetch their own collection in
//! full when it moves.

use chrono::NaiveDate;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Topic {
    Movements,
    Categories,
    Budgets,
    Recurring,
    Goals,
}

const TOPIC_COUNT: usize = 5;

impl Topic {
    fn index(self) -> usize {
        match self {
            Topic::Movements => 0,
            Topic::Categories => 1,
            Topic::Budgets => 2,
            Topic::Recurring => 3,
            Topic::Goals => 4,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Bus {
    quick_add_date: NaiveDate,
    stamps: [u64; TOPIC_COUNT],
}

impl Bus {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            quick_add_date: today,
            stamps: [0; TOPIC_COUNT],
        }
    }

    pub fn stamp(&self, topic: Topic) -> u64 {
        self.stamps[topic.index()]
    }

    pub fn quick_add_date(&self) -> NaiveDate {
        self.quick_add_date
    }

    pub fn bumped(&self, topic: Topic) -> Self {
        let mut next = self.clone();
        next.stamps[topic.index()] += 1;
        next
    }

    pub fn with_date(&self, date: NaiveDate) -> Self {
        let mut next = self.clone();
        next.quick_add_date = date;
        next
    }
}

pub type BusHandle = UseStateHandle<Bus>;

#[hook]
pub fn use_bus() -> BusHandle {
    use_context::<BusHandle>().expect("bus context not mounted")
}

pub fn publish(bus: &BusHandle, topic: Topic) {
    bus.set((**bus).bumped(topic));
}

// single set: consecutive publish() calls would each start from the
// pre-render snapshot and overwrite one another
pub fn publish_all(bus: &BusHandle, topics: &[Topic]) {
    let mut next = (**bus).clone();
    for topic in topics {
        next = next.bumped(*topic);
    }
    bus.set(next);
}

pub fn set_date_context(bus: &BusHandle, date: NaiveDate) {
    if (**bus).quick_add_date() != date {
        bus.set((**bus).with_date(date));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
    }

    #[test]
    fn stamps_are_monotonic_per_topic() {
        let bus = Bus::new(day());
        assert_eq!(bus.stamp(Topic::Movements), 0);
        let bus = bus.bumped(Topic::Movements);
        let bus = bus.bumped(Topic::Movements);
        assert_eq!(bus.stamp(Topic::Movements), 2);
    }

    #[test]
    fn topics_are_independent() {
        let bus = Bus::new(day()).bumped(Topic::Budgets);
        assert_eq!(bus.stamp(Topic::Budgets), 1);
        assert_eq!(bus.stamp(Topic::Movements), 0);
        assert_eq!(bus.stamp(Topic::Goals), 0);
    }

    #[test]
    fn date_context_travels_with_the_bus() {
        let bus = Bus::new(day());
        let viewed = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let bus = bus.with_date(viewed);
        assert_eq!(bus.quick_add_date(), viewed);
        // bumping a topic must not disturb the date context
        let bus = bus.bumped(Topic::Movements);
        assert_eq!(bus.quick_add_date(), viewed);
    }
}
