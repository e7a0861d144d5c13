quantity!(
    /// Swedish krona per kilowatt-hour, the unit the spot market quotes in.
    KilowattHourPrice,
    "SEK/kWh"
);

quantity!(
    /// [Öre][1] per kilowatt-hour, one hundredth of [`KilowattHourPrice`].
    ///
    /// [1]: https://en.wikipedia.org/wiki/%C3%96re
    OrePerKilowattHour,
    "öre/kWh"
);

impl From<KilowattHourPrice> for OrePerKilowattHour {
    fn from(price: KilowattHourPrice) -> Self {
        Self(price.0 * 100.0)
    }
}
