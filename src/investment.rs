//! Investment-decision outcome and payout.
//!
//! The subject invests a fixed stake of [`STAKE_UNITS`] in one of several
//! companies. Each company is secretly assigned one of four outcome tiers;
//! the tier of the chosen company decides the final value of the stake and
//! the money paid out at the end of the session. The subject also keeps an
//! uninvested endowment of the same size, and 1000 units are worth 1 €.
//!
//! For every subject the companies are presented in random order and three
//! of the four tiers are drawn without replacement, one per company
//! ([`TierAssignment::random`]).

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::Treatment;

/// Amount invested, in Geldeinheiten.
pub const STAKE_UNITS: i64 = 3000;

/// Uninvested endowment added to the payout, in Geldeinheiten.
pub const KEPT_UNITS: i64 = 3000;

/// Geldeinheiten per euro.
const UNITS_PER_EURO: i64 = 1000;

/// Outcome tier of a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeTier {
    Win1,
    Win2,
    Loss1,
    Loss2,
}

impl OutcomeTier {
    /// All tiers, best first.
    pub const ALL: [OutcomeTier; 4] = [
        OutcomeTier::Win1,
        OutcomeTier::Win2,
        OutcomeTier::Loss1,
        OutcomeTier::Loss2,
    ];

    /// Change of the stake's value, in Geldeinheiten.
    pub fn profit_units(&self) -> i64 {
        match self {
            OutcomeTier::Win1 => 1000,
            OutcomeTier::Win2 => 500,
            OutcomeTier::Loss1 => -500,
            OutcomeTier::Loss2 => -1000,
        }
    }

    pub fn is_gain(&self) -> bool {
        self.profit_units() > 0
    }

    /// Percentage by which the share price moved, rounded as shown to subjects.
    pub fn percent_change(&self) -> u32 {
        match self {
            OutcomeTier::Win1 | OutcomeTier::Loss2 => 33,
            OutcomeTier::Win2 | OutcomeTier::Loss1 => 17,
        }
    }

    /// Chart statement for a company in this tier.
    pub fn statement(&self, company: &str) -> String {
        let direction = if self.is_gain() { "erhöht" } else { "verringert" };
        format!(
            "Der Wert der **{}** hat sich um {}% **{}**.",
            company,
            self.percent_change(),
            direction
        )
    }
}

/// Which company ends up in which tier for one subject.
///
/// Companies are kept in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierAssignment {
    companies: Vec<(String, OutcomeTier)>,
}

impl TierAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shuffle `companies` into presentation order and give each a distinct
    /// tier drawn at random from [`OutcomeTier::ALL`].
    ///
    /// Returns `None` when there are more companies than tiers.
    pub fn random<S, R>(companies: &[S], rng: &mut R) -> Option<Self>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        if companies.len() > OutcomeTier::ALL.len() {
            return None;
        }

        let mut order: Vec<&str> = companies.iter().map(AsRef::as_ref).collect();
        order.shuffle(rng);
        let mut tiers = OutcomeTier::ALL;
        tiers.shuffle(rng);

        Some(
            order
                .into_iter()
                .zip(tiers)
                .fold(Self::new(), |assignment, (company, tier)| {
                    assignment.assign(company, tier)
                }),
        )
    }

    /// Assign `company` to `tier`, replacing an earlier assignment.
    pub fn assign(mut self, company: &str, tier: OutcomeTier) -> Self {
        self.companies.retain(|(name, _)| name != company);
        self.companies.push((company.to_string(), tier));
        self
    }

    /// Tier of `company`, if it was assigned one.
    pub fn tier_of(&self, company: &str) -> Option<OutcomeTier> {
        self.companies
            .iter()
            .find(|(name, _)| name == company)
            .map(|(_, tier)| *tier)
    }

    /// Companies and their tiers in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, OutcomeTier)> + '_ {
        self.companies
            .iter()
            .map(|(name, tier)| (name.as_str(), *tier))
    }

    /// Company that landed in `tier`, if any.
    pub fn company_in(&self, tier: OutcomeTier) -> Option<&str> {
        self.iter().find(|(_, t)| *t == tier).map(|(name, _)| name)
    }

    /// One chart statement per company, in presentation order.
    pub fn statements(&self) -> Vec<String> {
        self.iter()
            .map(|(company, tier)| tier.statement(company))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

/// Result of the subject's investment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestmentOutcome {
    company: String,
    tier: OutcomeTier,
}

impl InvestmentOutcome {
    /// Resolve the chosen company against the tier assignment.
    ///
    /// Returns `None` when the company has no tier.
    pub fn for_choice(company: &str, assignment: &TierAssignment) -> Option<Self> {
        let tier = assignment.tier_of(company)?;
        Some(Self {
            company: company.to_string(),
            tier,
        })
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn tier(&self) -> OutcomeTier {
        self.tier
    }

    pub fn profit_units(&self) -> i64 {
        self.tier.profit_units()
    }

    /// Value of the stake after the outcome.
    pub fn final_units(&self) -> i64 {
        STAKE_UNITS + self.profit_units()
    }

    /// Total paid out, in Geldeinheiten.
    pub fn payout_units(&self) -> i64 {
        KEPT_UNITS + self.final_units()
    }

    /// Total paid out, in euro cents.
    pub fn payout_cents(&self) -> i64 {
        self.payout_units() * 100 / UNITS_PER_EURO
    }

    /// Payout formatted as euros with two decimals (e.g. `"6.50"`).
    pub fn payout_euros(&self) -> String {
        let cents = self.payout_cents();
        format!("{}.{:02}", cents / 100, cents % 100)
    }

    /// Message describing how the investment developed.
    pub fn result_message(&self) -> String {
        let (direction, kind) = if self.tier.is_gain() {
            ("erhöht", "Gewinn")
        } else {
            ("verringert", "Verlust")
        };
        format!(
            "Du hast in die **{}** investiert. Deine Investitionssumme von {} Geldeinheiten hat sich somit auf **{} Geldeinheiten {}** und du hast **{} Geldeinheiten {} gemacht**.",
            self.company,
            STAKE_UNITS,
            self.final_units(),
            direction,
            self.profit_units().abs(),
            kind
        )
    }

    /// Praise after a gain, apology after a loss.
    ///
    /// `female` selects the feminine form "Investorin" in the praise.
    pub fn praise_or_apology(&self, name: &str, female: bool) -> String {
        if self.tier.is_gain() {
            let investor = if female { "Investorin" } else { "Investor" };
            format!(
                "Herzlichen Glückwunsch, **{}**, zu deinem Gewinn! **Du hast dein Können als {} bewiesen**.",
                name, investor
            )
        } else {
            format!(
                "**{}**, **es tut mir wirklich Leid**, dass die Aktienkurse deiner Aktie gefallen sind. Dein nächstes Investment wird sich bestimmt besser entwickeln.",
                name
            )
        }
    }

    /// [`praise_or_apology`](Self::praise_or_apology) if the treatment asks
    /// for it.
    pub fn closing_remark(&self, treatment: &Treatment, name: &str, female: bool) -> Option<String> {
        treatment
            .apologize_praise
            .then(|| self.praise_or_apology(name, female))
    }

    /// Message announcing the payout.
    pub fn payout_message(&self) -> String {
        format!(
            "Du bekommst {} Geldeinheiten = {}€ ausgezahlt.",
            self.payout_units(),
            self.payout_euros()
        )
    }
}

impl fmt::Display for InvestmentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.company, self.tier)
    }
}
