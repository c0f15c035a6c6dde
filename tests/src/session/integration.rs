#![cfg(test)]
use lotto_common::error::LottoError;
use lotto_core::checker::Checker;
use lotto_core::customer::Customer;
use lotto_core::draw::WinningDraw;
use lotto_core::game::GameService;
use lotto_core::number_pool::{NumberPool, NumberSource, RandomSource};
use lotto_core::parse::{parse_bonus, parse_money, parse_winning_numbers};
use lotto_core::prize::PrizeTier;
use lotto_core::result::ResultCalculator;
use lotto_core::store::Store;
use lotto_core::ticket::Ticket;
use std::collections::VecDeque;
use std::ops::RangeInclusive;

/// Hands out fixed draws so outcomes are known in advance.
struct FixedSource(VecDeque<Vec<u8>>);

impl NumberSource for FixedSource {
    fn pick_unique(&mut self, _range: RangeInclusive<u8>, _amount: usize) -> Vec<u8> {
        self.0.pop_front().unwrap_or_default()
    }
}

fn fixed_pool(draws: &[[u8; 6]]) -> NumberPool {
    NumberPool::new(Box::new(FixedSource(
        draws.iter().map(|draw| draw.to_vec()).collect(),
    )))
}

/// Walks the components by hand in the order the game service does.
#[test]
fn manual_session_matches_service() -> anyhow::Result<()> {
    let draws = [
        [1, 2, 3, 4, 5, 6],
        [1, 2, 3, 4, 5, 7],
        [1, 2, 3, 4, 5, 8],
        [1, 2, 3, 4, 10, 11],
        [1, 2, 3, 12, 13, 14],
        [40, 41, 42, 43, 44, 45],
    ];

    let mut store = Store::new(fixed_pool(&draws));
    let mut customer = Customer::new();

    customer.insert_money(&mut store, parse_money("6000")?);
    store.validate_money()?;
    assert_eq!(store.ticket_count()?, 6);
    customer.receive_tickets(store.issue_tickets()?);

    let winning = parse_winning_numbers("6,5,4,3,2,1")?;
    let draw = parse_bonus("7", &winning)?;
    let tally = customer.request_check(&Checker::new(), &draw);

    for tier in PrizeTier::ALL {
        assert_eq!(tally.count(tier), 1, "{tier:?}");
    }

    let manual_rate = ResultCalculator::default().profit_rate(&tally, store.money())?;

    let mut game = GameService::new(fixed_pool(&draws), ResultCalculator::default());
    game.purchase(6_000)?;
    let report = game.settle(&draw)?;

    assert_eq!(report.profit_rate, manual_rate);
    assert_eq!(report.tally, tally);
    Ok(())
}

#[test]
fn scenario_tiers() -> anyhow::Result<()> {
    let checker = Checker::new();
    let winning = Ticket::new(&[1, 2, 3, 4, 5, 6])?;
    let ticket = Ticket::new(&[1, 2, 3, 4, 5, 7])?;

    let with_bonus = WinningDraw::new(winning.clone(), 7)?;
    let without_bonus = WinningDraw::new(winning.clone(), 8)?;

    assert_eq!(checker.rank(&winning, &with_bonus), PrizeTier::First);
    assert_eq!(checker.rank(&ticket, &with_bonus), PrizeTier::Second);
    assert_eq!(checker.rank(&ticket, &without_bonus), PrizeTier::Third);
    Ok(())
}

#[test]
fn scenario_money_validation() {
    let mut store = Store::new(NumberPool::from_seed(Some(1)));

    store.receive_money(14_000);
    assert_eq!(store.validate_money(), Ok(14_000));
    assert_eq!(store.ticket_count(), Ok(14));

    store.receive_money(999);
    assert!(matches!(
        store.validate_money(),
        Err(LottoError::BelowMinimum { .. })
    ));

    store.receive_money(1_500);
    assert!(matches!(
        store.validate_money(),
        Err(LottoError::NotDivisible { .. })
    ));
}

#[test]
fn random_sessions_stay_consistent() -> anyhow::Result<()> {
    let draw = WinningDraw::new(Ticket::new(&[3, 9, 17, 22, 38, 44])?, 12)?;

    for seed in 0..20u64 {
        let pool = NumberPool::new(Box::new(RandomSource::seeded(seed)));
        let mut game = GameService::new(pool, ResultCalculator::new(2));

        let tickets = game.purchase(25_000)?;
        let report = game.settle(&draw)?;

        assert_eq!(tickets.len(), 25);
        assert_eq!(report.tally.tickets(), 25);
        assert!(!report.profit_rate.starts_with('-'));
        assert_eq!(report.profit_rate.split_once('.').map(|(_, f)| f.len()), Some(2));
    }
    Ok(())
}
