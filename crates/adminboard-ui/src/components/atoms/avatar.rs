use yew::prelude::*;

/// Up to two initials from the leading words of a display name.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub image: Option<AttrValue>,
}

#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    props.image.clone().map_or_else(
        || {
            html! {
                <span class="user-avatar-initials img-circle elevation-2">
                    {initials(&props.name)}
                </span>
            }
        },
        |src| {
            html! {
                <img
                    src={src}
                    class="user-image img-circle elevation-2"
                    alt={props.name.clone()}
                />
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_the_first_two_words() {
        assert_eq!(initials("Bob Jones"), "BJ");
        assert_eq!(initials("Alice"), "A");
        assert_eq!(initials("ada byron king"), "AB");
        assert_eq!(initials(""), "");
    }
}
