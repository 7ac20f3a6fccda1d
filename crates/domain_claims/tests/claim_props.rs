//! Property tests for the claim aggregate

use proptest::prelude::*;

use core_kernel::{ItemId, UserId};
use domain_claims::{Claim, ClaimStatus};

#[derive(Debug, Clone, Copy)]
enum Op {
    Approve,
    Reject,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Approve), Just(Op::Reject)]
}

proptest! {
    /// The verified flag stays in sync with the status under any sequence
    /// of approve/reject calls, whether or not they succeed.
    #[test]
    fn verified_tracks_status(ops in prop::collection::vec(op_strategy(), 0..16)) {
        let mut claim = Claim::file(ItemId::new(), UserId::new(), "answer").unwrap();

        for op in ops {
            let _ = match op {
                Op::Approve => claim.approve(),
                Op::Reject => claim.reject(),
            };
            prop_assert_eq!(claim.verified, claim.status == ClaimStatus::Approved);
        }
    }

    /// Once terminal, the status never changes again.
    #[test]
    fn terminal_states_are_sticky(ops in prop::collection::vec(op_strategy(), 1..16)) {
        let mut claim = Claim::file(ItemId::new(), UserId::new(), "answer").unwrap();

        let mut settled: Option<ClaimStatus> = None;
        for op in ops {
            let _ = match op {
                Op::Approve => claim.approve(),
                Op::Reject => claim.reject(),
            };
            match settled {
                None if claim.status.is_terminal() => settled = Some(claim.status),
                Some(status) => prop_assert_eq!(claim.status, status),
                None => {}
            }
        }
    }
}
