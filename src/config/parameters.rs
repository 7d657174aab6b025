// src/config/parameters.rs

use std::collections::HashMap;
use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use crate::math::error::SimError;

/// 標準重力加速度 (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.8;

/// 必須の変数とその意味
pub const REQUIRED_VARIABLES: [(&str, &str); 4] = [
    ("a", "Thruster acceleration (g)"),
    ("rot", "Rotation time (minutes)"),
    ("x", "meters right of center of rotation."),
    ("y", "meters fore of center of rotation"),
];

/// 入力ファイルから読み込む機体パラメータ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub a: f64,   // 推力加速度 (g)
    pub rot: f64, // 1回転の周期 (分)
    pub x: f64,   // 回転中心から右方向への加速度計の位置 (m)
    pub y: f64,   // 回転中心から前方への加速度計の位置 (m)
}

impl Parameters {
    /// 推力加速度 (m/s²)
    pub fn thrust_acceleration(&self) -> f64 {
        STANDARD_GRAVITY * self.a
    }

    /// 角速度 (rad/s)
    pub fn angular_rate(&self) -> f64 {
        (1.0 / 60.0) * (1.0 / self.rot) * 2.0 * PI
    }

    /// 回転中心から加速度計までの距離 (m)
    pub fn radial_offset(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }
}

/// `tokens[i]` の `p` バイト目から始まる代入を探す
///
/// キーはできるだけ長く取り、値は等号の後ろのトークン末尾まで取る。
///
/// # 戻り値
/// - `(キー, 値, 次に調べるトークン番号)`
fn match_assignment<'a>(
    tokens: &[&'a str],
    i: usize,
    p: usize,
) -> Option<(&'a str, &'a str, usize)> {
    let token = tokens[i];
    let token = &token[p..];

    // key =value / key = value
    if let Some(rest) = tokens.get(i + 1).copied().and_then(|next| next.strip_prefix('=')) {
        if !rest.is_empty() {
            return Some((token, rest, i + 2));
        }
        if let Some(value) = tokens.get(i + 2).copied() {
            return Some((token, value, i + 3));
        }
    }

    // key=value / key= value（右側の等号から順に試す）
    for (k, _) in token.rmatch_indices('=') {
        if k == 0 {
            continue;
        }
        let value = &token[k + 1..];
        if !value.is_empty() {
            return Some((&token[..k], value, i + 1));
        }
        if let Some(value) = tokens.get(i + 1).copied() {
            return Some((&token[..k], value, i + 2));
        }
    }

    None
}

/// `key=value` 形式の代入を出現順に取り出す
///
/// `#` 以降は行末までコメントとして捨てる。`=` の前後の空白は許容するが、
/// キーと値そのものに空白は含まれない。トークン途中から始まる代入も拾う。
pub fn scan_assignments(text: &str) -> Vec<(String, String)> {
    let mut assignments = Vec::new();

    for raw_line in text.lines() {
        let line = match raw_line.find('#') {
            Some(idx) => &raw_line[..idx],
            None => raw_line,
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let mut i = 0;
        'tokens: while i < tokens.len() {
            for (p, _) in tokens[i].char_indices() {
                if let Some((key, value, next)) = match_assignment(&tokens, i, p) {
                    assignments.push((key.to_string(), value.to_string()));
                    i = next;
                    continue 'tokens;
                }
            }
            i += 1;
        }
    }

    assignments
}

/// 設定テキストからパラメータを組み立てる
///
/// 同じキーが複数回現れた場合は最後の値を採用する。
pub fn parse_parameters(text: &str) -> Result<Parameters, SimError> {
    let values: HashMap<String, String> = scan_assignments(text).into_iter().collect();

    let lookup = |name: &str, meaning: &str| -> Result<f64, SimError> {
        let raw = values.get(name).ok_or_else(|| SimError::MissingParameter {
            name: name.to_string(),
            meaning: meaning.to_string(),
        })?;
        raw.parse::<f64>().map_err(|_| SimError::InvalidValue {
            name: name.to_string(),
            value: raw.clone(),
        })
    };

    let [a, rot, x, y] = REQUIRED_VARIABLES;
    let params = Parameters {
        a: lookup(a.0, a.1)?,
        rot: lookup(rot.0, rot.1)?,
        x: lookup(x.0, x.1)?,
        y: lookup(y.0, y.1)?,
    };

    // 周期 0 では角速度が定義できない
    if params.rot == 0.0 {
        return Err(SimError::InvalidValue {
            name: rot.0.to_string(),
            value: params.rot.to_string(),
        });
    }
    Ok(params)
}

/// パラメータファイルの読み込み
pub fn load_parameters(path: &Path) -> Result<Parameters, SimError> {
    let text = fs::read_to_string(path).map_err(|e| SimError::io(path, e))?;
    parse_parameters(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_scan_assignments_spacing_variants() {
        let text = "a=1 rot = 2\nx= 3 y =4";
        assert_eq!(
            scan_assignments(text),
            vec![pair("a", "1"), pair("rot", "2"), pair("x", "3"), pair("y", "4")]
        );
    }

    #[test]
    fn test_scan_assignments_strips_comments() {
        let text = "a=1 # rot=5\n# x=2\ny=3";
        assert_eq!(scan_assignments(text), vec![pair("a", "1"), pair("y", "3")]);
    }

    #[test]
    fn test_scan_assignments_key_takes_all_but_last_equals() {
        assert_eq!(scan_assignments("a=b=c"), vec![pair("a=b", "c")]);
    }

    #[test]
    fn test_scan_assignments_backtracks_like_greedy_pattern() {
        // 次のトークンが `=` で始まれば、前のトークン全体がキーになる
        assert_eq!(scan_assignments("a=1 =2"), vec![pair("a=1", "2")]);
        assert_eq!(scan_assignments("a= =1"), vec![pair("a=", "1")]);
        // 末尾の `=` の後ろに値が無ければ、手前の `=` で区切る
        assert_eq!(scan_assignments("a=1="), vec![pair("a", "1=")]);
        assert_eq!(scan_assignments("=a=1"), vec![pair("=a", "1")]);
    }

    #[test]
    fn test_scan_assignments_ignores_dangling_tokens() {
        assert_eq!(scan_assignments("just words a= "), Vec::<(String, String)>::new());
    }

    #[test]
    fn test_parse_parameters_last_write_wins() {
        let params = parse_parameters("a=1\nrot=1\nx=0\ny=0\na=2.5").unwrap();
        assert_eq!(params.a, 2.5);
        assert_eq!(params.rot, 1.0);
    }

    #[test]
    fn test_parse_parameters_missing_variable() {
        let err = parse_parameters("a=1 rot=1 x=0").unwrap_err();
        match err {
            SimError::MissingParameter { name, .. } => assert_eq!(name, "y"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_parameters_invalid_number() {
        let err = parse_parameters("a=fast rot=1 x=0 y=0").unwrap_err();
        assert!(matches!(err, SimError::InvalidValue { ref name, .. } if name == "a"));
    }

    #[test]
    fn test_parse_parameters_rejects_zero_rotation_period() {
        let err = parse_parameters("a=1 rot=0 x=0 y=0").unwrap_err();
        assert!(matches!(err, SimError::InvalidValue { ref name, .. } if name == "rot"));
    }

    #[test]
    fn test_parse_parameters_ignores_unknown_keys() {
        let params = parse_parameters("name=ship a=1 rot=2 x=3 y=4").unwrap();
        assert_eq!(params, Parameters { a: 1.0, rot: 2.0, x: 3.0, y: 4.0 });
    }

    #[test]
    fn test_derived_quantities() {
        let params = Parameters { a: 1.0, rot: 1.0, x: 3.0, y: 4.0 };
        assert_relative_eq!(params.thrust_acceleration(), 9.8);
        assert_relative_eq!(params.angular_rate(), 2.0 * PI / 60.0, epsilon = 1e-15);
        assert_relative_eq!(params.radial_offset(), 5.0);
    }
}
