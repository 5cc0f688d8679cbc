use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The fixed shift vocabulary the scheduler reasons about.
///
/// `ControlDesk` is distinguished from `Day`/`Night`: it drops out of
/// coverage on weekends and holidays (H3) and is capped at two per week
/// per agent (H6), rules that never apply to the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shift {
    Day,
    Night,
    ControlDesk,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Day, Shift::Night, Shift::ControlDesk];

    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Day => "Day",
            Shift::Night => "Night",
            Shift::ControlDesk => "ControlDesk",
        }
    }

    pub fn from_name(name: &str) -> Option<Shift> {
        match name {
            "Day" => Some(Shift::Day),
            "Night" => Some(Shift::Night),
            "ControlDesk" => Some(Shift::ControlDesk),
            _ => None,
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shift durations plus the synthetic `Conge` (leave credit) entry, all in
/// tenths of an hour. Built once from the decimal-hours configuration by
/// scaling by 10 -- every integer in this table and everywhere it flows is
/// already in that unit.
#[derive(Debug, Clone)]
pub struct Durations {
    pub day: i64,
    pub night: i64,
    pub control_desk: i64,
    pub conge: i64,
}

impl Durations {
    pub fn of(&self, shift: Shift) -> i64 {
        match shift {
            Shift::Day => self.day,
            Shift::Night => self.night,
            Shift::ControlDesk => self.control_desk,
        }
    }

    /// Scale a table of decimal hours (keyed by shift name, plus `"Conge"`)
    /// into tenths-of-an-hour integers.
    pub fn from_decimal_hours(hours: &HashMap<String, f64>) -> Self {
        let scale = |name: &str| -> i64 { (hours.get(name).copied().unwrap_or(0.0) * 10.0).round() as i64 };
        Self {
            day: scale("Day"),
            night: scale("Night"),
            control_desk: scale("ControlDesk"),
            conge: scale("Conge"),
        }
    }
}

/// A single calendar day in the planning horizon.
///
/// Two labels are equal iff their full dates are equal; the other fields are
/// redundant projections of `date` carried so constraint/objective code never
/// has to re-derive them.
#[derive(Debug, Clone, Copy)]
pub struct DayLabel {
    pub date: NaiveDate,
    pub iso_year: i32,
    pub iso_week: u32,
    /// 0 = Monday .. 6 = Sunday, matching `Weekday::num_days_from_monday`.
    pub day_of_week: u32,
    pub day_of_month: u32,
    pub month: u32,
}

impl DayLabel {
    pub fn new(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            date,
            iso_year: iso.year(),
            iso_week: iso.week(),
            day_of_week: date.weekday().num_days_from_monday(),
            day_of_month: date.day(),
            month: date.month(),
        }
    }

    pub fn is_saturday(&self) -> bool {
        self.day_of_week == 5
    }

    pub fn is_sunday(&self) -> bool {
        self.day_of_week == 6
    }

    pub fn is_monday(&self) -> bool {
        self.day_of_week == 0
    }

    pub fn is_weekend(&self) -> bool {
        self.is_saturday() || self.is_sunday()
    }

    pub fn is_holiday(&self, holidays: &HashSet<(u32, u32)>) -> bool {
        holidays.contains(&(self.month, self.day_of_month))
    }

    pub fn succ(&self) -> DayLabel {
        DayLabel::new(self.date.succ_opt().expect("date overflow"))
    }
}

impl PartialEq for DayLabel {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}
impl Eq for DayLabel {}

impl PartialOrd for DayLabel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for DayLabel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.date.cmp(&other.date)
    }
}
impl std::hash::Hash for DayLabel {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.date.hash(state);
    }
}

/// An agent's preferred/avoided shifts. `preferred` and `avoid` must be
/// disjoint -- enforced by the normalizer, not here.
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    pub preferred: BTreeSet<Shift>,
    pub avoid: BTreeSet<Shift>,
}

// `Shift` needs `Ord` to live in a `BTreeSet`; derive it from the fixed
// enumeration order rather than pulling in a derive that would also order
// by discriminant (equivalent here, but explicit beats implicit).
impl PartialOrd for Shift {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Shift {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        fn rank(s: &Shift) -> u8 {
            match s {
                Shift::Day => 0,
                Shift::Night => 1,
                Shift::ControlDesk => 2,
            }
        }
        rank(self).cmp(&rank(other))
    }
}

/// A normalized agent, ready to be fed into the Variable Space.
#[derive(Debug, Clone)]
pub struct Agent {
    pub name: String,
    pub preferences: Preferences,
    pub unavailable: HashSet<DayLabel>,
    pub training: HashSet<DayLabel>,
    pub leave: Option<(DayLabel, DayLabel)>,
    pub exclusions: HashSet<DayLabel>,
    pub restrictions: BTreeSet<Shift>,
}

impl Agent {
    /// Whether `day` falls inside this agent's leave interval, inclusive.
    pub fn is_on_leave(&self, day: &DayLabel) -> bool {
        match &self.leave {
            Some((start, end)) => *start <= *day && *day <= *end,
            None => false,
        }
    }

    /// Union of unavailable/training/exclusions/leave -- the full H7 ban set.
    pub fn is_unavailable(&self, day: &DayLabel) -> bool {
        self.unavailable.contains(day)
            || self.training.contains(day)
            || self.exclusions.contains(day)
            || self.is_on_leave(day)
    }
}

/// The planning horizon: the requested range plus the seven days immediately
/// preceding it (needed only so H4 can reach across the boundary), plus the
/// holiday set used by H3/predicate checks.
#[derive(Debug, Clone)]
pub struct Horizon {
    pub current: Vec<DayLabel>,
    pub previous: Vec<DayLabel>,
    pub holidays: HashSet<(u32, u32)>,
}

impl Horizon {
    /// All days, previous week first, in chronological order -- the axis the
    /// Variable Space indexes over.
    pub fn all_days(&self) -> Vec<DayLabel> {
        let mut days = self.previous.clone();
        days.extend(self.current.iter().copied());
        days
    }
}

/// A pinned (agent, previous-week day, shift) triple.
#[derive(Debug, Clone)]
pub struct SeedShift {
    pub agent: String,
    pub day: DayLabel,
    pub shift: Shift,
}

/// The solved roster: agent name -> ordered (day, shift) pairs, restricted to
/// `Horizon::current`.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub assignments: HashMap<String, Vec<(DayLabel, Shift)>>,
}

impl Roster {
    pub fn shifts_for(&self, agent: &str) -> &[(DayLabel, Shift)] {
        self.assignments
            .get(agent)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
