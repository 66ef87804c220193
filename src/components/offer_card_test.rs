use super::*;

#[test]
fn match_tier_thresholds() {
    assert_eq!(match_tier(100), "high");
    assert_eq!(match_tier(70), "high");
    assert_eq!(match_tier(69), "mid");
    assert_eq!(match_tier(50), "mid");
    assert_eq!(match_tier(49), "low");
    assert_eq!(match_tier(0), "low");
}
