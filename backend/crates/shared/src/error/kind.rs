//! Error Kind - HTTP classification of application errors

/// エラー種別の列挙体
///
/// このバックエンドが返しうる HTTP ステータスだけを列挙します。
/// 認証系（401/403）と入力系（400）の区別は API 契約の一部なので、
/// バリアントの追加・変更は慎重に行ってください。
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::Forbidden.status_code(), 403);
/// assert_eq!(ErrorKind::Forbidden.as_str(), "Forbidden");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400 - 入力不備、または資格情報の不一致
    BadRequest,
    /// 401 - トークンが提示されていない
    Unauthorized,
    /// 403 - トークンが不正・改ざん・期限切れ
    Forbidden,
    /// 404 - リソースが存在しない
    NotFound,
    /// 500 - サーバー内部エラー
    InternalServerError,
}

impl ErrorKind {
    /// HTTP ステータスコード
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
        }
    }

    /// 標準の理由フレーズ（problem document の `title`）
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::InternalServerError => "Internal Server Error",
        }
    }

    /// 5xx 系（詳細はログにのみ残す）
    pub const fn is_server_error(self) -> bool {
        matches!(self, Self::InternalServerError)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
