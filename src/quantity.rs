#[macro_use]
pub mod macros;

pub mod currency;
pub mod energy;
pub mod power;
pub mod price;
pub mod time;
mod zero;

pub use self::zero::Zero;

#[cfg(test)]
mod tests {
    use super::{
        Zero,
        currency::Cost,
        energy::KilowattHours,
        power::Kilowatts,
        price::KilowattHourPrice,
        time::Hours,
    };

    #[test]
    fn test_min() {
        assert_eq!(KilowattHours(1.0).min(KilowattHours(2.0)), KilowattHours(1.0));
        assert_eq!(KilowattHours(2.0).min(KilowattHours(1.0)), KilowattHours(1.0));
    }

    #[test]
    fn test_max() {
        assert_eq!(Kilowatts(0.1).max(Kilowatts::MIN_CHARGING_POWER), Kilowatts(0.2));
        assert_eq!(Kilowatts(3.0).max(Kilowatts::MIN_CHARGING_POWER), Kilowatts(3.0));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(Hours(1.0).clamp(Hours(2.0), Hours(3.0)), Hours(2.0));
        assert_eq!(Hours(4.0).clamp(Hours(2.0), Hours(3.0)), Hours(3.0));
        assert_eq!(Hours(2.0).clamp(Hours(1.0), Hours(3.0)), Hours(2.0));
    }

    #[test]
    fn test_energy_over_power() {
        assert_eq!(KilowattHours(3.0) / Kilowatts(1.5), Hours(2.0));
    }

    #[test]
    fn test_energy_times_price() {
        assert_eq!(KilowattHours(2.0) * KilowattHourPrice(9.0), Cost(18.0));
    }

    #[test]
    fn test_add() {
        assert_eq!(Cost(1.0) + Cost(2.5) + Cost::ZERO, Cost(3.5));
    }

    #[test]
    fn test_scaling() {
        assert_eq!(Cost(3.0) * 0.5, Cost(1.5));
        assert_eq!(KilowattHours(2.0) / 0.8, KilowattHours(2.5));
    }

    #[test]
    fn test_display_default_precision() {
        assert_eq!(KilowattHours(2.8).to_string(), "2.80 kWh");
        assert_eq!(Kilowatts(3.0).to_string(), "3.0 kW");
        assert_eq!(Cost(5.6).to_string(), "5.60");
        assert_eq!(KilowattHourPrice(9.0).to_string(), "9.00 /kWh");
    }

    #[test]
    fn test_display_explicit_precision() {
        assert_eq!(format!("{:.3}", Hours(1.014_49)), "1.014 h");
        assert_eq!(format!("{:.0}", KilowattHours(2.8)), "3 kWh");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", KilowattHours(2.5)), "2.5kWh");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("4.0".parse::<KilowattHours>().unwrap(), KilowattHours(4.0));
        assert!("four".parse::<Kilowatts>().is_err());
    }
}
