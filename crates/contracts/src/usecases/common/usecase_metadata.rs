/// Метаданные UseCase для идентификации и маршрутизации
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u001")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "upload_pdf")
    fn usecase_name() -> &'static str;

    /// HTTP endpoint, relative to the API base (например, "/upload")
    fn endpoint() -> &'static str;

    /// Полное имя вида "u001_upload_pdf"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
