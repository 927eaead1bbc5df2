use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("设定错误: {0}")]
    Config(String),

    #[error("请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON解析错误: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("图像处理错误: {0}")]
    Image(#[from] image::ImageError),

    #[error("场景文件不正确: {0}")]
    InvalidScenarios(String),

    #[error("响应中没有截图")]
    NoScreenshot,

    #[error(transparent)]
    Common(#[from] costchecker_common::Error),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
