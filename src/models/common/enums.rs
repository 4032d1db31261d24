//! 以字符串形式持久化的枚举
//!
//! 数据库中统一存字符串，序列化值与存储值保持一致。

/// 定义字符串枚举的宏
///
/// 自动生成 serde 序列化名、`as_str()`、`Display` 与 `FromStr`。
macro_rules! define_string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, ts_rs::TS,
        )]
        $(#[$meta])*
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    _ => Err(format!("Invalid {}: {s}", stringify!($name))),
                }
            }
        }
    };
}

pub(crate) use define_string_enum;

#[cfg(test)]
mod tests {
    define_string_enum! {
        Shift {
            Morning => "morning",
            Afternoon => "afternoon",
        }
    }

    #[test]
    fn test_round_trip_through_str() {
        assert_eq!("morning".parse::<Shift>(), Ok(Shift::Morning));
        assert_eq!(Shift::Afternoon.to_string(), "afternoon");
        assert!("evening".parse::<Shift>().is_err());
    }

    #[test]
    fn test_serde_uses_declared_value() {
        let json = serde_json::to_string(&Shift::Morning).unwrap();
        assert_eq!(json, "\"morning\"");
        let parsed: Shift = serde_json::from_str("\"afternoon\"").unwrap();
        assert_eq!(parsed, Shift::Afternoon);
    }
}
