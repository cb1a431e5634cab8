/*
 * Responsibility
 * - HTTP に依存しない補助サービス (公開 ID 変換、日付整形)
 */
pub mod date_format;
pub mod id_codec;
