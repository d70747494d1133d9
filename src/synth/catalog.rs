//! Fixed texts the synthesizer draws from.

use crate::locale::Locale;
use crate::results::StatusTab;
use crate::shipment::{EventKind, ShipmentState};

/// Number of cities in every locale's list.
pub const CITY_COUNT: usize = 10;

const CITIES_EN: [&str; CITY_COUNT] = [
    "Riyadh", "Jeddah", "Dammam", "Makkah", "Madinah", "Tabuk", "Abha", "Taif", "Khobar", "Dhahran",
];

const CITIES_AR: [&str; CITY_COUNT] = [
    "الرياض",
    "جدة",
    "الدمام",
    "مكة",
    "المدينة المنورة",
    "تبوك",
    "أبها",
    "الطائف",
    "الخبر",
    "الظهران",
];

/// Field captions of a rendered result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Heading above the tab counts.
    Results,
    /// Departure city.
    Origin,
    /// Arrival city.
    Destination,
    /// Latest status change.
    LastUpdate,
    /// Expected delivery.
    EstimatedDelivery,
    /// Milestone timeline.
    History,
}

/// Locale-bound lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    locale: Locale,
}

impl Catalog {
    /// Catalog for `locale`.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// City at `index`, wrapping past the end of the list.
    #[must_use]
    pub fn city(self, index: u64) -> &'static str {
        let cities = match self.locale {
            Locale::En => &CITIES_EN,
            Locale::Ar => &CITIES_AR,
        };
        let slot = index % cities.len() as u64;
        cities[usize::try_from(slot).unwrap_or_default()]
    }

    /// Summary text for a top-level state.
    #[must_use]
    pub fn state_description(self, state: ShipmentState) -> &'static str {
        match (self.locale, state) {
            (Locale::En, ShipmentState::Delivered) => "Shipment delivered",
            (Locale::En, ShipmentState::InTransit) => "Shipment in transit to destination",
            (Locale::En, ShipmentState::Pending) => "Shipment processed for delivery",
            (Locale::En, ShipmentState::Exception) => {
                "Delivery exception - please contact customer service"
            }
            (Locale::Ar, ShipmentState::Delivered) => "تم تسليم الشحنة",
            (Locale::Ar, ShipmentState::InTransit) => "الشحنة قيد النقل إلى الوجهة",
            (Locale::Ar, ShipmentState::Pending) => "تمت معالجة الشحنة للتسليم",
            (Locale::Ar, ShipmentState::Exception) => {
                "استثناء في التسليم - يرجى الاتصال بخدمة العملاء"
            }
        }
    }

    /// Explanation attached to a history milestone.
    #[must_use]
    pub fn event_description(self, kind: EventKind) -> &'static str {
        match (self.locale, kind) {
            (Locale::En, EventKind::Created) => "Shipment information received",
            (Locale::En, EventKind::PickedUp) => "Shipment picked up by courier",
            (Locale::En, EventKind::SortingCenter) => "Shipment processed at sorting center",
            (Locale::En, EventKind::RegionalCenter) => "Shipment on its way to destination",
            (Locale::En, EventKind::OutForDelivery) => "Shipment out for delivery",
            (Locale::En, EventKind::Delivered) => "Shipment delivered",
            (Locale::En, EventKind::Exception) => "Delivery exception - address unreachable",
            (Locale::Ar, EventKind::Created) => "تم استلام معلومات الشحنة",
            (Locale::Ar, EventKind::PickedUp) => "تم استلام الشحنة من قبل مندوب التوصيل",
            (Locale::Ar, EventKind::SortingCenter) => "يتم معالجة الشحنة في مركز الفرز",
            (Locale::Ar, EventKind::RegionalCenter) => "الشحنة في طريقها إلى الوجهة",
            (Locale::Ar, EventKind::OutForDelivery) => "الشحنة خرجت للتسليم",
            (Locale::Ar, EventKind::Delivered) => "تم تسليم الشحنة",
            (Locale::Ar, EventKind::Exception) => "استثناء في التسليم - العنوان غير قابل للوصول",
        }
    }

    /// Fixed location of the sorting-center milestone.
    #[must_use]
    pub fn sorting_center(self) -> &'static str {
        match self.locale {
            Locale::En => "Sorting Center",
            Locale::Ar => "مركز الفرز",
        }
    }

    /// Fixed location of the regional-center milestone.
    #[must_use]
    pub fn regional_center(self) -> &'static str {
        match self.locale {
            Locale::En => "Regional Center",
            Locale::Ar => "المركز الإقليمي",
        }
    }

    /// Badge text shown for a state.
    #[must_use]
    pub fn state_badge(self, state: ShipmentState) -> &'static str {
        match self.locale {
            Locale::En => state.label(),
            Locale::Ar => match state {
                ShipmentState::Delivered => "تم التسليم",
                ShipmentState::InTransit => "قيد النقل",
                ShipmentState::Pending => "قيد الانتظار",
                ShipmentState::Exception => "استثناء",
            },
        }
    }

    /// Caption for a card field or the results heading.
    #[must_use]
    pub fn label(self, label: Label) -> &'static str {
        match (self.locale, label) {
            (Locale::En, Label::Results) => "Tracking results",
            (Locale::En, Label::Origin) => "Origin",
            (Locale::En, Label::Destination) => "Destination",
            (Locale::En, Label::LastUpdate) => "Last update",
            (Locale::En, Label::EstimatedDelivery) => "Estimated delivery",
            (Locale::En, Label::History) => "History",
            (Locale::Ar, Label::Results) => "نتائج التتبع",
            (Locale::Ar, Label::Origin) => "المصدر",
            (Locale::Ar, Label::Destination) => "الوجهة",
            (Locale::Ar, Label::LastUpdate) => "آخر تحديث",
            (Locale::Ar, Label::EstimatedDelivery) => "التسليم المتوقع",
            (Locale::Ar, Label::History) => "سجل التتبع",
        }
    }

    /// Name of a status tab in the results heading.
    #[must_use]
    pub fn tab_title(self, tab: StatusTab) -> String {
        match (self.locale, tab) {
            (Locale::En, _) => tab.to_string(),
            (Locale::Ar, StatusTab::All) => "الكل".to_string(),
            (Locale::Ar, StatusTab::Delivered) => self.state_badge(ShipmentState::Delivered).to_string(),
            (Locale::Ar, StatusTab::InTransit) => self.state_badge(ShipmentState::InTransit).to_string(),
            (Locale::Ar, StatusTab::Pending) => self.state_badge(ShipmentState::Pending).to_string(),
        }
    }

    /// Message shown when a batch has no results at all.
    #[must_use]
    pub fn no_results(self) -> &'static str {
        match self.locale {
            Locale::En => "No tracking results found.",
            Locale::Ar => "لم يتم العثور على نتائج تتبع.",
        }
    }

    /// Placeholder for an absent estimated delivery.
    #[must_use]
    pub fn unavailable(self) -> &'static str {
        match self.locale {
            Locale::En => "n/a",
            Locale::Ar => "غير متاح",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [EventKind; 7] = [
        EventKind::Created,
        EventKind::PickedUp,
        EventKind::SortingCenter,
        EventKind::RegionalCenter,
        EventKind::OutForDelivery,
        EventKind::Delivered,
        EventKind::Exception,
    ];

    #[test]
    fn city_index_wraps() {
        let catalog = Catalog::new(Locale::En);
        assert_eq!(catalog.city(0), "Riyadh");
        assert_eq!(catalog.city(9), "Dhahran");
        assert_eq!(catalog.city(13), "Makkah");
        assert_eq!(catalog.city(u64::MAX), "Tabuk");
    }

    #[test]
    fn locales_have_matching_city_positions() {
        assert_eq!(Catalog::new(Locale::Ar).city(0), "الرياض");
        assert_eq!(Catalog::new(Locale::Ar).city(4), "المدينة المنورة");
    }

    #[test]
    fn event_descriptions_are_distinct() {
        for locale in [Locale::En, Locale::Ar] {
            let catalog = Catalog::new(locale);
            let mut texts: Vec<_> = KINDS.iter().map(|k| catalog.event_description(*k)).collect();
            texts.sort_unstable();
            texts.dedup();
            assert_eq!(texts.len(), 7, "locale {locale}");
        }
    }

    #[test]
    fn english_badge_is_wire_label() {
        let catalog = Catalog::new(Locale::En);
        assert_eq!(catalog.state_badge(ShipmentState::InTransit), "In Transit");
        assert_eq!(Catalog::new(Locale::Ar).state_badge(ShipmentState::Pending), "قيد الانتظار");
    }

    #[test]
    fn card_captions_follow_the_locale() {
        let en = Catalog::new(Locale::En);
        let ar = Catalog::new(Locale::Ar);
        assert_eq!(en.label(Label::EstimatedDelivery), "Estimated delivery");
        assert_eq!(ar.label(Label::Origin), "المصدر");
        assert_eq!(ar.label(Label::Results), "نتائج التتبع");
        assert_eq!(en.tab_title(StatusTab::InTransit), "in-transit");
        assert_eq!(ar.tab_title(StatusTab::All), "الكل");
        assert_eq!(ar.tab_title(StatusTab::Delivered), "تم التسليم");
        assert_eq!(ar.no_results(), "لم يتم العثور على نتائج تتبع.");
    }
}
