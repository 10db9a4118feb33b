use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 밀리리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Liter,
    Milliliter,
    UsFluidOunce,
}

const ML_PER_US_FL_OZ: f64 = 29.573_529_562_5;

fn to_milliliter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value * 1000.0,
        VolumeUnit::Milliliter => value,
        VolumeUnit::UsFluidOunce => value * ML_PER_US_FL_OZ,
    }
}

fn from_milliliter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value / 1000.0,
        VolumeUnit::Milliliter => value,
        VolumeUnit::UsFluidOunce => value / ML_PER_US_FL_OZ,
    }
}

/// 체적을 변환한다. 같은 단위끼리는 값을 그대로 돌려준다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    if from == to {
        return value;
    }
    from_milliliter(to_milliliter(value, from), to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liters_to_milliliters_is_exact() {
        for l in [0.1, 2.5, 7.3, 12.0] {
            assert_eq!(convert_volume(l, VolumeUnit::Liter, VolumeUnit::Milliliter), l * 1000.0);
        }
    }

    #[test]
    fn fluid_ounce_round_trip() {
        let oz = convert_volume(100.0, VolumeUnit::Milliliter, VolumeUnit::UsFluidOunce);
        assert!((oz - 3.3814).abs() < 1e-4);
        let ml = convert_volume(oz, VolumeUnit::UsFluidOunce, VolumeUnit::Milliliter);
        assert!((ml - 100.0).abs() < 1e-9);
    }
}
