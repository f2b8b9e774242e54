use super::{Key, KEY_LEN};

use proptest::{arbitrary::StrategyFor, prelude::*, strategy::Map};

impl Arbitrary for Key {
    type Parameters = ();
    type Strategy = Map<StrategyFor<[u8; KEY_LEN]>, fn([u8; KEY_LEN]) -> Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        any::<[u8; KEY_LEN]>().prop_map(Key)
    }
}
