use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "costchecker")]
#[command(about = "CostChecker 查询控制台", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIのベースURL（設定ファイル・API_BASEより優先）
    #[arg(long, global = true)]
    pub api_base: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 自由文で問い合わせ
    Query {
        /// 問い合わせ文
        #[arg(required = true)]
        text: String,

        /// スクリーンショットに強調矩形を描いて保存（PNG）
        #[arg(long)]
        shot: Option<PathBuf>,
    },

    /// 確認候補を選択
    Confirm {
        /// 確認ID
        #[arg(required = true)]
        confirmation_id: String,

        /// 選択する候補ID
        #[arg(required = true)]
        option: String,

        /// スクリーンショットに強調矩形を描いて保存（PNG）
        #[arg(long)]
        shot: Option<PathBuf>,
    },

    /// シナリオファイルを一括実行してMarkdownレポートを出力
    Scenarios {
        /// シナリオJSONファイル
        #[arg(required = true)]
        file: PathBuf,

        /// 出力ファイル（デフォルト: scenario-results-<時刻>.md）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 確認待ちでも自動選択しない
        #[arg(long)]
        no_auto_confirm: bool,
    },

    /// 設定管理
    Config {
        /// APIのベースURLを保存
        #[arg(long)]
        set_api_base: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
