// qiita-core: shared types and character utilities.

pub mod kana;
pub mod token;
