use serde::{Deserialize, Serialize};

/// 발전소 규모(공칭 설비용량) 프리셋.
///
/// 금액은 모두 유로 기준이다. 범위 값(수익/ROI/회수기간/NPV)은 화면에
/// "일반적인 범위"로 표시하기 위한 참고값이며 계산에는 투자비 범위와
/// 설비용량만 사용한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSizePreset {
    /// 프리셋 키 (예: "5MW")
    pub key: String,
    /// 공칭 설비용량 [MW]
    pub capacity_mw: f64,
    pub min_investment: f64,
    pub max_investment: f64,
    pub min_revenue: f64,
    pub max_revenue: f64,
    pub min_roi_pct: f64,
    pub max_roi_pct: f64,
    pub min_payback_years: f64,
    pub max_payback_years: f64,
    pub min_npv: f64,
    pub max_npv: f64,
}

impl InvestmentSizePreset {
    /// 투자비 범위의 산술 중간값.
    pub fn midpoint_investment(&self) -> f64 {
        (self.min_investment + self.max_investment) / 2.0
    }
}

/// 순서를 보존하는 프리셋 조회 테이블.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetTable {
    presets: Vec<InvestmentSizePreset>,
}

impl PresetTable {
    pub fn new(presets: Vec<InvestmentSizePreset>) -> Self {
        Self { presets }
    }

    /// 키로 프리셋을 찾는다.
    pub fn get(&self, key: &str) -> Option<&InvestmentSizePreset> {
        self.presets.iter().find(|p| p.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InvestmentSizePreset> {
        self.presets.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// 내장 1MW/5MW/10MW 프리셋.
    pub fn builtin() -> Self {
        Self::new(vec![
            InvestmentSizePreset {
                key: "1MW".into(),
                capacity_mw: 1.0,
                min_investment: 850_000.0,
                max_investment: 1_150_000.0,
                min_revenue: 250_000.0,
                max_revenue: 330_000.0,
                min_roi_pct: 22.0,
                max_roi_pct: 30.0,
                min_payback_years: 3.3,
                max_payback_years: 4.5,
                min_npv: 1_300_000.0,
                max_npv: 2_000_000.0,
            },
            InvestmentSizePreset {
                key: "5MW".into(),
                capacity_mw: 5.0,
                min_investment: 4_500_000.0,
                max_investment: 5_500_000.0,
                min_revenue: 1_250_000.0,
                max_revenue: 1_650_000.0,
                min_roi_pct: 22.0,
                max_roi_pct: 30.0,
                min_payback_years: 3.3,
                max_payback_years: 4.5,
                min_npv: 6_500_000.0,
                max_npv: 10_000_000.0,
            },
            InvestmentSizePreset {
                key: "10MW".into(),
                capacity_mw: 10.0,
                min_investment: 8_500_000.0,
                max_investment: 11_500_000.0,
                min_revenue: 2_500_000.0,
                max_revenue: 3_300_000.0,
                min_roi_pct: 22.0,
                max_roi_pct: 30.0,
                min_payback_years: 3.3,
                max_payback_years: 4.5,
                min_npv: 13_000_000.0,
                max_npv: 20_000_000.0,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_midpoints() {
        let table = PresetTable::builtin();
        let mids: Vec<f64> = table.iter().map(|p| p.midpoint_investment()).collect();
        assert_eq!(mids, vec![1_000_000.0, 5_000_000.0, 10_000_000.0]);
    }

    #[test]
    fn lookup_keeps_declared_order() {
        let table = PresetTable::builtin();
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["1MW", "5MW", "10MW"]);
        assert_eq!(table.get("10MW").map(|p| p.capacity_mw), Some(10.0));
        assert!(table.get("2MW").is_none());
    }
}
