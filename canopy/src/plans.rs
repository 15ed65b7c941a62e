use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

pub const PLANS_FAILED: &str = "Could not load plans. Please try again later.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Yearly => "Yearly",
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/mo",
            BillingCycle::Yearly => "/yr",
        }
    }

    pub fn toggled(self) -> BillingCycle {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub monthly_price: f64,
    #[serde(default)]
    pub yearly_price: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, alias = "isPopular")]
    pub popular: bool,
}

impl Plan {
    pub fn price(&self, cycle: BillingCycle) -> f64 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.yearly_price,
        }
    }

    pub fn is_free(&self) -> bool {
        self.monthly_price <= 0.0 && self.yearly_price <= 0.0
    }

    /// `"Free"`, `"$9/mo"`, `"$4.99/mo"`, `"$90/yr"`.
    pub fn price_label(&self, cycle: BillingCycle) -> String {
        if self.is_free() {
            return "Free".to_owned();
        }
        format!("{}{}", dollars(self.price(cycle)), cycle.suffix())
    }

    /// Percentage saved by paying yearly instead of twelve monthly payments.
    pub fn yearly_savings_percent(&self) -> Option<u32> {
        let full_year = self.monthly_price * 12.0;
        if full_year <= 0.0 || self.yearly_price >= full_year {
            return None;
        }
        let percent = ((1.0 - self.yearly_price / full_year) * 100.0).round() as u32;
        (percent > 0).then_some(percent)
    }
}

fn dollars(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(monthly: f64, yearly: f64) -> Plan {
        Plan {
            id: "pro".into(),
            name: "Pro".into(),
            description: None,
            monthly_price: monthly,
            yearly_price: yearly,
            features: vec!["Unlimited links".into()],
            popular: true,
        }
    }

    #[test]
    fn price_labels() {
        assert_eq!(plan(0.0, 0.0).price_label(BillingCycle::Monthly), "Free");
        assert_eq!(plan(9.0, 90.0).price_label(BillingCycle::Monthly), "$9/mo");
        assert_eq!(plan(9.0, 90.0).price_label(BillingCycle::Yearly), "$90/yr");
        assert_eq!(plan(4.99, 49.9).price_label(BillingCycle::Monthly), "$4.99/mo");
    }

    #[test]
    fn yearly_savings() {
        assert_eq!(plan(10.0, 96.0).yearly_savings_percent(), Some(20));
        assert_eq!(plan(10.0, 120.0).yearly_savings_percent(), None);
        assert_eq!(plan(0.0, 0.0).yearly_savings_percent(), None);
    }

    #[test]
    fn parses_plan_list_in_order() {
        let json = r#"[
            { "_id": "free", "name": "Free", "monthlyPrice": 0, "yearlyPrice": 0, "features": ["5 links"] },
            { "_id": "pro", "name": "Pro", "monthlyPrice": 9, "yearlyPrice": 90, "features": [], "isPopular": true },
            { "_id": "biz", "name": "Business", "monthlyPrice": 29, "yearlyPrice": 290, "popular": false }
        ]"#;
        let plans: Vec<Plan> = serde_json::from_str(json).unwrap();
        let names: Vec<_> = plans.iter().map(|plan| plan.name.as_str()).collect();
        assert_eq!(names, ["Free", "Pro", "Business"]);
        assert!(plans[1].popular);
        assert!(!plans[2].popular);
    }

    #[test]
    fn toggling_cycles() {
        assert_eq!(BillingCycle::Monthly.toggled(), BillingCycle::Yearly);
        assert_eq!(BillingCycle::Yearly.toggled(), BillingCycle::Monthly);
    }
}
