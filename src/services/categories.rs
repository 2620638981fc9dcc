use crate::domain::category::Category;
use crate::dto::categories::CategoryDto;

use super::ServiceResult;

/// The fixed six-entry category catalogue, in display order.
pub fn show_categories() -> ServiceResult<Vec<CategoryDto>> {
    Ok(Category::ALL.into_iter().map(CategoryDto::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_has_six_fixed_entries() {
        let categories = show_categories().unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].value, "visual_style");
        assert_eq!(categories[0].label, "Visual Style");
        assert_eq!(categories[5].value, "behavior_pattern");
    }
}
