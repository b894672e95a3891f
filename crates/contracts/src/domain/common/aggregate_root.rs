use super::AggregateId;

/// Трейт для корня агрегата, хранимого в `EntityCollection`
///
/// Связывает запись с её идентификатором и формой редактирования:
/// коллекция создаёт записи через `from_form` и обновляет через `apply_form`.
pub trait Entity: Clone {
    /// Тип идентификатора агрегата
    type Id: AggregateId;

    /// Данные формы создания/редактирования
    type Form;

    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Создать запись из данных формы с заданным ID
    fn from_form(id: Self::Id, form: Self::Form) -> Self;

    /// Применить данные формы к существующей записи
    ///
    /// Поля, которых нет в форме (вложенные записи, счётчики), сохраняются.
    fn apply_form(&mut self, form: Self::Form);

    // ============================================================================
    // Метаданные класса агрегата
    // ============================================================================

    /// Имя коллекции (например, "categories")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI и сообщений (например, "Category")
    fn element_name() -> &'static str;
}
