macro_rules! nutype_string {
    ($ident:ident($($attrs:tt)+)) => {
        #[::nutype::nutype(
            $($attrs)+,
            derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
                Deref,
                TryFrom,
                Serialize,
                Deserialize,
            )
        )]
        pub struct $ident(String);
    };
}

pub(crate) use nutype_string;
