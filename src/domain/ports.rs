/// 識別碼產生器：方便測試時替換成可預測的序列
pub trait IdGenerator: Send + Sync {
    fn generate_id(&self) -> String;
}
