// src/math/error.rs

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    /// 必須の変数が設定ファイルに無い
    #[error("Need to enter {name} in your file. {name}={meaning}")]
    MissingParameter { name: String, meaning: String },

    /// 変数の値が実数として解釈できない
    #[error("{name} の値 `{value}` を実数として解釈できません。")]
    InvalidValue { name: String, value: String },

    #[error("シミュレーション設定が不正です: {0}")]
    InvalidSettings(String),

    /// 差分推定に必要なサンプル数が窓に無い
    #[error("位置サンプルが不足しています (必要: {required}, 保持: {available})")]
    InsufficientSamples { required: usize, available: usize },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 出力先への書き込み失敗
    #[error("出力の書き込みに失敗しました: {0}")]
    Output(#[from] std::io::Error),

    #[error("設定ファイルの読み込みに失敗しました: {0}")]
    Settings(#[from] serde_yaml::Error),
}

impl SimError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SimError::Io {
            path: path.into(),
            source,
        }
    }

    /// プロセスの終了コード（使い方の誤りは clap 側で 2 を返す）
    pub fn exit_code(&self) -> u8 {
        1
    }
}
