mod charging;
mod sorted;
mod summary;

use std::{
    fmt::{Display, Formatter},
    num::NonZeroUsize,
    str::FromStr,
};

use chrono::{NaiveDate, Utc};
use clap::Parser;
use reqwest::Url;

pub use self::{charging::charging, sorted::sorted, summary::summary};
use crate::{
    api::elpriset_just_nu::{self, DEFAULT_BASE_URL, TIME_ZONE},
    core::zone::Zone,
    prelude::*,
};

/// Without `--sorted` or `--charging`, prints the cheapest, the most expensive, and the mean
/// price of the day.
#[derive(Parser)]
#[command(author, version, about)]
#[must_use]
pub struct Args {
    /// Bidding zone.
    #[clap(long, env = "ELPRIS_ZONE", ignore_case = true)]
    pub zone: Zone,

    /// Day to look at, `YYYY-MM-DD`. Defaults to today in Swedish time.
    #[clap(long, env = "ELPRIS_DATE")]
    pub date: Option<NaiveDate>,

    /// List the day's prices, cheapest first.
    #[clap(long, conflicts_with = "charging")]
    pub sorted: bool,

    /// Find the cheapest consecutive hours to charge in, today or tomorrow: `2h`, `4h`, or `8h`.
    #[clap(long)]
    pub charging: Option<ChargingDuration>,

    #[clap(flatten)]
    pub provider: ProviderArgs,
}

impl Args {
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Utc::now().with_timezone(&TIME_ZONE).date_naive())
    }

    pub const fn mode(&self) -> Mode {
        match self.charging {
            Some(duration) => Mode::Charging(duration),
            None if self.sorted => Mode::Sorted,
            None => Mode::Summary,
        }
    }
}

#[derive(Parser)]
pub struct ProviderArgs {
    /// Elpriset just nu API base URL.
    #[clap(long = "api-base-url", env = "ELPRIS_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,
}

impl ProviderArgs {
    pub fn try_new_client(&self) -> Result<elpriset_just_nu::Api> {
        elpriset_just_nu::Api::try_new(self.base_url.clone())
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    Summary,
    Sorted,
    Charging(ChargingDuration),
}

/// Length of the charging window.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ChargingDuration(NonZeroUsize);

impl ChargingDuration {
    const ALLOWED_HOURS: [NonZeroUsize; 3] = [
        NonZeroUsize::new(2).unwrap(),
        NonZeroUsize::new(4).unwrap(),
        NonZeroUsize::new(8).unwrap(),
    ];

    #[must_use]
    pub const fn hours(self) -> NonZeroUsize {
        self.0
    }
}

impl FromStr for ChargingDuration {
    type Err = Error;

    /// Parse `2h`, `4h`, or `8h`, the suffix being optional.
    fn from_str(text: &str) -> Result<Self> {
        let text = text.trim().to_lowercase();
        let hours = text.strip_suffix('h').unwrap_or(&text);
        let hours: usize =
            hours.parse().with_context(|| format!("`{text}` is not a number of hours"))?;
        Self::ALLOWED_HOURS
            .into_iter()
            .find(|allowed| allowed.get() == hours)
            .map(Self)
            .context("use 2h, 4h, or 8h")
    }
}

impl Display for ChargingDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h", self.0)
    }
}
