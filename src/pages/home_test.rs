use super::*;

#[test]
fn plan_prices_use_french_formatting() {
    assert_eq!(plan_price(&PLANS[1]), "19,00\u{00A0}€ / month");
    assert_eq!(plan_price(&PLANS[2]), "1\u{202F}490,00\u{00A0}€ / month");
}

#[test]
fn exactly_one_plan_is_highlighted() {
    assert_eq!(PLANS.iter().filter(|p| p.highlighted).count(), 1);
}
