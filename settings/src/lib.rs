use secrecy::{ExposeSecret as _, SecretString};
use sqlx::postgres::PgConnectOptions;

/// アプリケーション名
///
/// ログのサービス名とヘルスチェックレスポンスで使用する。
pub const APPLICATION_NAME: &str = "placeholder-api";

/// 動作環境の環境変数名
pub const ENV_APP_ENVIRONMENT: &str = "APP_ENVIRONMENT";
/// HTTPサーバーの環境変数名
pub const ENV_HTTP_HOST: &str = "HTTP_HOST";
pub const ENV_HTTP_PORT: &str = "HTTP_PORT";
/// データベースの環境変数名
pub const ENV_DATABASE_HOST: &str = "DATABASE_HOST";
pub const ENV_DATABASE_PORT: &str = "DATABASE_PORT";
pub const ENV_DATABASE_NAME: &str = "DATABASE_NAME";
pub const ENV_DATABASE_USER: &str = "DATABASE_USER";
pub const ENV_DATABASE_PASSWORD: &str = "DATABASE_PASSWORD";
pub const ENV_DATABASE_SCHEMA: &str = "DATABASE_SCHEMA";
pub const ENV_DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
pub const ENV_DATABASE_CONNECTION_TIMEOUT: &str = "DATABASE_CONNECTION_TIMEOUT";
/// 外部APIの環境変数名
pub const ENV_PLACEHOLDER_BASE_URL: &str = "PLACEHOLDER_BASE_URL";

const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_DATABASE_CONNECTION_TIMEOUT: u64 = 3;
const DEFAULT_PLACEHOLDER_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// 設定エラー
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    /// 必須の環境変数が設定されていない。
    ///
    /// 最初に検出した環境変数だけでなく、不足しているすべての環境変数の名前を含む。
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingEnvironmentVariables(Vec<String>),

    /// 環境変数の値が不正である。
    #[error("invalid value for environment variable {name}: {value}")]
    InvalidEnvironmentVariable { name: String, value: String },
}

/// 動作環境
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// 開発環境
    Development,
    /// 本番環境
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for Environment {
    type Error = SettingsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            _ => Err(SettingsError::InvalidEnvironmentVariable {
                name: ENV_APP_ENVIRONMENT.to_string(),
                value,
            }),
        }
    }
}

/// アプリケーション設定
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// 動作環境
    pub environment: Environment,
    /// HTTPサーバー設定
    pub http: HttpServerSettings,
    /// データベース設定
    pub database: DatabaseSettings,
    /// 外部API設定
    pub placeholder: PlaceholderSettings,
}

/// HTTPサーバー設定
#[derive(Debug, Clone)]
pub struct HttpServerSettings {
    /// ホスト名
    pub host: String,
    /// ポート番号
    pub port: u16,
}

/// データベース設定
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    /// ホスト名
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// ユーザー名
    pub user: String,
    /// パスワード
    pub password: SecretString,
    /// データベース名
    pub name: String,
    /// スキーマ名
    pub schema: String,
    /// 最大接続数
    pub max_connections: u32,
    /// 接続タイムアウト（秒）
    pub connection_timeout: u64,
}

/// 外部API設定
#[derive(Debug, Clone)]
pub struct PlaceholderSettings {
    /// 外部APIのベースURL
    pub base_url: String,
}

impl AppSettings {
    /// 環境変数からアプリケーション設定を読み込む。
    ///
    /// 必須の環境変数は不足をすべて収集してから検証するため、エラーには
    /// 不足している環境変数の名前がすべて含まれる。
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 環境変数の参照関数からアプリケーション設定を読み込む。
    ///
    /// プロセスの環境変数を変更せずにテストできるように、参照関数を受け取る。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 必須の環境変数を読み込み、不足しているものをすべて収集
        let mut missing: Vec<String> = vec![];
        let database_host = read_required(&lookup, ENV_DATABASE_HOST, &mut missing);
        let database_port = read_required(&lookup, ENV_DATABASE_PORT, &mut missing);
        let database_name = read_required(&lookup, ENV_DATABASE_NAME, &mut missing);
        let database_user = read_required(&lookup, ENV_DATABASE_USER, &mut missing);
        let database_password = read_required(&lookup, ENV_DATABASE_PASSWORD, &mut missing);
        let database_schema = read_required(&lookup, ENV_DATABASE_SCHEMA, &mut missing);
        if !missing.is_empty() {
            return Err(SettingsError::MissingEnvironmentVariables(missing));
        }

        let environment = match read_optional(&lookup, ENV_APP_ENVIRONMENT) {
            Some(value) => Environment::try_from(value)?,
            None => Environment::Development,
        };
        let http = HttpServerSettings {
            host: read_optional(&lookup, ENV_HTTP_HOST)
                .unwrap_or_else(|| DEFAULT_HTTP_HOST.to_string()),
            port: parse_or_default(&lookup, ENV_HTTP_PORT, DEFAULT_HTTP_PORT)?,
        };
        let database = DatabaseSettings {
            host: database_host,
            port: parse_value(ENV_DATABASE_PORT, database_port)?,
            user: database_user,
            password: SecretString::from(database_password),
            name: database_name,
            schema: database_schema,
            max_connections: parse_or_default(
                &lookup,
                ENV_DATABASE_MAX_CONNECTIONS,
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            )?,
            connection_timeout: parse_or_default(
                &lookup,
                ENV_DATABASE_CONNECTION_TIMEOUT,
                DEFAULT_DATABASE_CONNECTION_TIMEOUT,
            )?,
        };
        let base_url = read_optional(&lookup, ENV_PLACEHOLDER_BASE_URL)
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER_BASE_URL.to_string());
        let placeholder = PlaceholderSettings {
            // 末尾のスラッシュはパスを連結するときに二重になるため除去
            base_url: base_url.trim_end_matches('/').to_string(),
        };

        Ok(Self {
            environment,
            http,
            database,
            placeholder,
        })
    }
}

impl HttpServerSettings {
    /// バインドするアドレス（ホスト名とポート番号）を返す。
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseSettings {
    /// データベース接続オプションを返す。
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(self.password.expose_secret())
            .database(&self.name)
    }
}

/// 環境変数を参照して、空白のみの値を未設定として扱う。
fn read_optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.trim().is_empty())
}

/// 必須の環境変数を参照して、不足している場合は名前を記録する。
fn read_required<F>(lookup: &F, name: &str, missing: &mut Vec<String>) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match read_optional(lookup, name) {
        Some(value) => value,
        None => {
            missing.push(name.to_string());
            String::new()
        }
    }
}

/// 環境変数の値をパースする。
fn parse_value<T: std::str::FromStr>(name: &str, value: String) -> Result<T, SettingsError> {
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(SettingsError::InvalidEnvironmentVariable {
            name: name.to_string(),
            value,
        }),
    }
}

/// 任意の環境変数をパースして、未設定の場合は既定値を返す。
fn parse_or_default<F, T>(lookup: &F, name: &str, default: T) -> Result<T, SettingsError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match read_optional(lookup, name) {
        Some(value) => parse_value(name, value),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// すべての必須環境変数を含む環境変数のリストを返す。
    fn required_vars() -> Vec<(&'static str, String)> {
        vec![
            (ENV_DATABASE_HOST, "localhost".to_string()),
            (ENV_DATABASE_PORT, "5432".to_string()),
            (ENV_DATABASE_NAME, "placeholder_api".to_string()),
            (ENV_DATABASE_USER, "postgres".to_string()),
            (ENV_DATABASE_PASSWORD, "password".to_string()),
            (ENV_DATABASE_SCHEMA, "public".to_string()),
        ]
    }

    fn lookup_from(vars: Vec<(&'static str, String)>) -> impl Fn(&str) -> Option<String> {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.clone())
        }
    }

    #[test]
    fn app_settings_from_lookup() {
        let settings = AppSettings::from_lookup(lookup_from(required_vars())).unwrap();

        assert_eq!(settings.environment, Environment::Development);
        assert_eq!(settings.http.host, "0.0.0.0");
        assert_eq!(settings.http.port, 8080);
        assert_eq!(settings.database.host, "localhost");
        assert_eq!(settings.database.port, 5432);
        assert_eq!(settings.database.name, "placeholder_api");
        assert_eq!(settings.database.user, "postgres");
        assert_eq!(settings.database.schema, "public");
        assert_eq!(settings.database.max_connections, 5);
        assert_eq!(settings.database.connection_timeout, 3);
        assert_eq!(
            settings.placeholder.base_url,
            "https://jsonplaceholder.typicode.com"
        );
    }

    #[rstest::rstest]
    #[case(ENV_DATABASE_HOST)]
    #[case(ENV_DATABASE_PORT)]
    #[case(ENV_DATABASE_NAME)]
    #[case(ENV_DATABASE_USER)]
    #[case(ENV_DATABASE_PASSWORD)]
    #[case(ENV_DATABASE_SCHEMA)]
    fn app_settings_from_lookup_with_a_missing_variable(#[case] name: &str) {
        let vars = required_vars()
            .into_iter()
            .filter(|(key, _)| *key != name)
            .collect::<Vec<_>>();

        let result = AppSettings::from_lookup(lookup_from(vars));

        match result {
            Err(SettingsError::MissingEnvironmentVariables(missing)) => {
                assert_eq!(missing, vec![name.to_string()]);
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    /// 不足している環境変数は、最初の1つだけでなくすべて報告される。
    #[test]
    fn app_settings_from_lookup_with_multiple_missing_variables() {
        let vars = required_vars()
            .into_iter()
            .filter(|(key, _)| *key != ENV_DATABASE_HOST && *key != ENV_DATABASE_PASSWORD)
            .collect::<Vec<_>>();

        let result = AppSettings::from_lookup(lookup_from(vars));

        match result {
            Err(SettingsError::MissingEnvironmentVariables(missing)) => {
                assert_eq!(
                    missing,
                    vec![
                        ENV_DATABASE_HOST.to_string(),
                        ENV_DATABASE_PASSWORD.to_string()
                    ]
                );
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    /// 空白のみの値は未設定として扱う。
    #[rstest::rstest]
    #[case("")]
    #[case("   ")]
    fn app_settings_from_lookup_with_an_empty_variable(#[case] value: &str) {
        let mut vars = required_vars();
        for entry in vars.iter_mut() {
            if entry.0 == ENV_DATABASE_SCHEMA {
                entry.1 = value.to_string();
            }
        }

        let result = AppSettings::from_lookup(lookup_from(vars));

        match result {
            Err(SettingsError::MissingEnvironmentVariables(missing)) => {
                assert_eq!(missing, vec![ENV_DATABASE_SCHEMA.to_string()]);
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn app_settings_from_lookup_with_an_invalid_port() {
        let mut vars = required_vars();
        for entry in vars.iter_mut() {
            if entry.0 == ENV_DATABASE_PORT {
                entry.1 = "not-a-port".to_string();
            }
        }

        let result = AppSettings::from_lookup(lookup_from(vars));

        match result {
            Err(SettingsError::InvalidEnvironmentVariable { name, value }) => {
                assert_eq!(name, ENV_DATABASE_PORT);
                assert_eq!(value, "not-a-port");
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[rstest::rstest]
    #[case("development", Environment::Development)]
    #[case("production", Environment::Production)]
    #[case("Production", Environment::Production)]
    fn app_settings_from_lookup_with_an_environment(
        #[case] value: &str,
        #[case] expected: Environment,
    ) {
        let mut vars = required_vars();
        vars.push((ENV_APP_ENVIRONMENT, value.to_string()));

        let settings = AppSettings::from_lookup(lookup_from(vars)).unwrap();

        assert_eq!(settings.environment, expected);
    }

    #[test]
    fn app_settings_from_lookup_with_an_unknown_environment() {
        let mut vars = required_vars();
        vars.push((ENV_APP_ENVIRONMENT, "staging".to_string()));

        let result = AppSettings::from_lookup(lookup_from(vars));

        assert!(matches!(
            result,
            Err(SettingsError::InvalidEnvironmentVariable { .. })
        ));
    }

    /// ベースURLの末尾のスラッシュは除去される。
    #[test]
    fn app_settings_from_lookup_trims_the_base_url() {
        let mut vars = required_vars();
        vars.push((
            ENV_PLACEHOLDER_BASE_URL,
            "http://127.0.0.1:9000/".to_string(),
        ));

        let settings = AppSettings::from_lookup(lookup_from(vars)).unwrap();

        assert_eq!(settings.placeholder.base_url, "http://127.0.0.1:9000");
    }
}
