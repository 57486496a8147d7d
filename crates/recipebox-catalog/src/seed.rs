//! Preview recipes used to bootstrap an empty catalogue
//!
//! The first recipe lists its instructions out of order and its ingredients
//! out of position order across three sections; the others mix sectioned and
//! unsectioned ingredients. Ordering code is expected to cope with both.

use recipebox_model::{Cuisine, Instruction, ItalianWine, MealCourse, Recipe, RecipeIngredient};
use url::Url;

fn thumbnail(url: &str) -> Option<Url> {
    Url::parse(url).ok()
}

fn item(name: &str) -> RecipeIngredient {
    RecipeIngredient::named(name)
}

/// The four preview recipes
#[must_use]
pub fn preview_recipes() -> Vec<Recipe> {
    vec![gong_bao_chicken(), miso_green_beans(), dry_fried_green_beans(), beef_onion_ragu()]
}

fn gong_bao_chicken() -> Recipe {
    let mut recipe = Recipe::new(
        "Gong Bao Chicken With Peanuts",
        Cuisine::chinese("Sichuan"),
        MealCourse::Main,
    )
    .with_details("A more authentic Kung Pao")
    .with_credit("adapted from 'Every Grain of Rice: Simple Chinese Home Cooking', by Fuchsia Dunlop (W.W. Norton & Company, 2013)")
    .with_ingredients(vec![
        item("garlic").with_quantity(3.0).with_unit("cloves").at_position(2).in_section("Chicken"),
        item("potato starch or corn starch").with_quantity(0.75).with_unit("tsp").at_position(14).in_section("Sauce"),
        item("spring onions").with_quantity(5.0).with_note("white parts only").at_position(4).in_section("Chicken"),
        item("dried chiles").with_unit("A handful of").at_position(5).in_section("Chicken"),
        item("cooking oil").with_quantity(2.0).with_unit("Tbsp").at_position(6).in_section("Chicken"),
        item("boneless chicken breasts").with_quantity(2.0).with_note("(11 to 12 ounces total), with or without skin").at_position(1).in_section("Chicken"),
        item("Chinkiang vinegar").with_quantity(1.0).with_unit("Tbsp").with_note("or use balsamic vinegar").at_position(17).in_section("Sauce"),
        item("Sichuan Pepper").with_quantity(1.0).with_unit("tsp").with_note("whole, toasted").at_position(7).in_section("Chicken"),
        item("roasted peanuts").with_quantity(75.0).with_unit("grams").with_note("see note").at_position(8).in_section("Chicken"),
        item("salt").with_quantity(0.5).with_unit("tsp").at_position(9).in_section("Marinade"),
        item("light soy sauce").with_quantity(2.0).with_unit("tsp").at_position(10).in_section("Marinade"),
        item("ginger").with_unit("An equivalent amount of").at_position(3).in_section("Chicken"),
        item("Shaoxing wine").with_quantity(1.0).with_unit("tsp").with_note("or use dry sherry or dry vermouth").at_position(11).in_section("Marinade"),
        item("potato starch or corn starch").with_quantity(1.5).with_unit("tsp").at_position(12).in_section("Marinade"),
        item("sugar").with_quantity(1.0).with_unit("Tbsp").at_position(13).in_section("Sauce"),
        item("dark soy sauce").with_quantity(1.0).with_unit("tsp").at_position(15).in_section("Sauce"),
        item("light soy sauce").with_quantity(1.0).with_unit("tsp").at_position(16).in_section("Sauce"),
        item("sesame oil").with_quantity(1.0).with_unit("tsp").at_position(18).in_section("Sauce"),
        item("chicken stock").with_quantity(1.0).with_unit("Tbsp").with_note("or water").at_position(19).in_section("Sauce"),
    ])
    .with_instructions(vec![
        Instruction::at(1, "Cut chicken as evenly as possible into half-inch strips, then cut strips into small cubes. Place in a small bowl. Add marinade ingredients and 1 tablespoon water to bowl. Mix well and set aside."),
        Instruction::at(3, "In a small bowl, combine the sauce ingredients."),
        Instruction::at(5, "Quickly add chicken and stir-fry over a high flame, stirring constantly. As soon as chicken cubes have separated, add ginger, garlic and spring onions and continue to stir-fry until they are fragrant and meat is just cooked through (test one of the larger pieces to make sure)."),
        Instruction::at(2, "Peel and thinly slice garlic and ginger. Chop spring onions into chunks as long as their diameter (to match the chicken cubes). Snip chiles in half or into sections, discarding their seeds."),
        Instruction::at(6, "Give sauce a stir and add to wok, continuing to stir and toss. As soon as the sauce has become thick and shiny, add the peanuts, stir them in and serve."),
        Instruction::at(4, "Heat a seasoned wok over a high flame. Add oil, chiles and Sichuan pepper and stir-fry briefly until chiles are darkening but not burned. (Remove wok from heat if necessary to prevent overheating.)"),
    ])
    .with_section_labels(["Chicken", "Marinade", "Sauce"]);
    recipe.thumbnail_url =
        thumbnail("https://education-jrp.s3.amazonaws.com/RecipeImages/KungPaoChicken.png");
    recipe
}

fn miso_green_beans() -> Recipe {
    let mut recipe = Recipe::new("Green Beans with Miso Butter", Cuisine::Japanese, MealCourse::Side)
        .with_details("A great all purpose side dish. Those unfamiliar with miso will wonder what makes the dish so good. Is it Japanese?  Well, Japanese-ish-fusion-America-something.")
        .with_credit("Adapted from the May 2012 issue of Bon Appetit magazine from a recipe by Patrick Fleming from Boke Bowl in Portland, Oregon")
        .with_ingredients(vec![
            item("green beans").with_quantity(0.5).with_unit("pound").with_note("trimmed").at_position(1),
            item("unsalted butter").with_unit("2 Tbsp plus 2 tsp").with_note("room temperature").at_position(2),
            item("miso").with_quantity(2.0).with_unit("tsp").at_position(3),
            item("vegetable oil").with_quantity(2.0).with_unit("Tbsp").at_position(4),
            item("kosher salt and freshly ground black pepper").at_position(5),
            item("shallot").with_quantity(2.0).with_unit("tsp").with_note("minced").at_position(6),
            item("garlic").with_quantity(1.0).with_unit("clove").with_note("minced").at_position(7),
            item("sake").with_quantity(0.25).with_unit("cup").at_position(8),
            item("vegetable broth").with_quantity(0.25).with_unit("cup").with_note("or water").at_position(9),
            item("sesame seeds").with_note("optional").at_position(10),
        ])
        .with_instructions(vec![
            Instruction::at(1, "Whisk butter with miso in a small bowl"),
            Instruction::at(2, "Put green beans in a bowl and microwave for 4-5 minutes until just getting tender. Drain the beans and pat them dry."),
            Instruction::at(3, "Heat vegetable oil in a large skillet over medium-high heat. Add the beans to the skillet and season with salt and pepper. Toss."),
            Instruction::at(4, "Stir in shallot and garlic and cook for 1 minute."),
            Instruction::at(5, "Add sake and cook until evaporated, 1-2 minutes."),
            Instruction::at(6, "Add vegetable broth or water; cook until the sauce thickens and reduces by half, 1 minute or so."),
            Instruction::at(7, "Lower heat to medium; add miso butter mixture and stir until a creamy sauce forms. Garnish with sesame seeds, if desired."),
        ]);
    recipe.thumbnail_url =
        thumbnail("https://education-jrp.s3.amazonaws.com/RecipeImages/MisoGreenBeans.jpg");
    recipe
}

fn dry_fried_green_beans() -> Recipe {
    let mut recipe = Recipe::new("Dry-fried Green Beans", Cuisine::chinese("Sichuan"), MealCourse::Side)
        .with_details("Sichuan favorite")
        .with_ingredients(vec![
            item("Soy Sauce").with_quantity(3.0).with_unit("Tbsp").at_position(1).in_section("Sauce"),
            item("Soybean Paste").with_quantity(1.0).with_unit("Tbsp").at_position(2).in_section("Sauce"),
            item("Shaoxing wine").with_quantity(2.0).with_unit("Tbsp").with_note("Or dry sherry").at_position(3).in_section("Sauce"),
            item("Sugar").with_quantity(2.0).with_unit("tsp").at_position(4).in_section("Sauce"),
            item("Cornstarch").with_quantity(1.0).with_unit("tsp").at_position(5).in_section("Sauce"),
            item("Red Pepper Flakes").with_quantity(0.5).with_unit("tsp").at_position(6).in_section("Sauce"),
            item("White Pepper").with_quantity(0.5).with_unit("tsp").with_note("ground").at_position(7).in_section("Sauce"),
            item("Water").with_quantity(4.0).with_unit("Tbsp").with_note("ground").at_position(8).in_section("Sauce"),
            item("Green Beans").with_quantity(1.0).with_unit("pound").at_position(9),
            item("Vegetable Oil").with_quantity(2.0).with_unit("Tbsp").at_position(10),
            item("Ground Pork").with_quantity(0.25).with_unit("pound").with_note("optional").at_position(11),
            item("Scallions").with_quantity(3.0).with_note("white and light green parts sliced thin").at_position(12),
            item("Toasted Sesame Oil").with_quantity(1.0).with_unit("tsp").at_position(13),
            item("Sichuan peppercorns").with_quantity(1.0).with_unit("tsp").with_note("ground, optional").at_position(1).in_section("Aromatics"),
            item("garlic").with_quantity(3.0).with_unit("medium cloves").with_note("minced, about 1 Tbsp.").at_position(2).in_section("Aromatics"),
            item("ginger").with_quantity(1.0).with_unit("Tbsp").with_note("minced (not grated)").at_position(3).in_section("Aromatics"),
            item("fermented mustard greens").with_quantity(3.0).with_unit("Tbsp").with_note("This ingredient is uncommon but vital.").at_position(4).in_section("Aromatics"),
        ])
        .with_instructions(vec![
            Instruction::at(1, "1. Prepare the sauce by mixing in small bowl: soy sauce, soybean paste, sugar, cornstartch, white pepper, pepper flakes, and water. Set this aside."),
            Instruction::at(2, "2. Heat oil in a wok or 12-inch nonstick skillet over high heat. Add the green beans and cook, stirring often, until beans are slightly tender and are shriveled and blackened in spots. This should take 4-8 minutes. Remove the beans from the pan."),
            Instruction::at(3, "3. If you are including the ground pork, reduce the heat to medium-high and add the pork to the pan. Cook the pork for 2 minutes, breaking it up into small pieces."),
            Instruction::at(4, "4. At medium-high heat add the aromatics (garlic, ginger, mustard greens, and optional peppercorns) to the pan (keeping the pork in the pan if using.) Stir until the garlic and ginger are fragant, around 30 seconds."),
            Instruction::at(5, "5. Give the sauce (still in the small bowl) another stir and then add it to the pan. Add the green beans. Stir to combine and cook until the suace thickens, 10-15 seconds. Remove pan from heat and stir in scallions and sesame oil."),
        ])
        .with_section_labels(["Sauce", "Aromatics"]);
    recipe.thumbnail_url =
        thumbnail("https://education-jrp.s3.amazonaws.com/RecipeImages/SichuanGreenBeans.jpg");
    recipe
}

fn beef_onion_ragu() -> Recipe {
    let mut recipe = Recipe::new(
        "Rigatoni with Beef and Onion Ragu",
        Cuisine::italian(ItalianWine::Taurisi),
        MealCourse::Main,
    )
    .with_details("Also known as a Neopolitan ragu or sometimes 'pasta all Genovese', though it is from Campania and not Liguria, hence the pairing with the Taurisi.")
    .with_credit("Adapted from Cooks Illustrated magazine, Nov/Dec 2013 issue")
    .with_ingredients(vec![
        item("Boneless beef chuck-eye roast").with_quantity(1.0).with_unit("1- to 1 1/4-pound").with_note("cut into 4 pieces and trimmed of large pieces of fat").at_position(1),
        item("Pancetta").with_quantity(2.0).with_unit("oz").with_note("cubed into 1/2-inch pieces").at_position(2),
        item("Salami").with_quantity(2.0).with_unit("oz").with_note("cut into 1/2-inch pieces").at_position(3),
        item("Carrot").with_quantity(1.0).with_unit("small").with_note("sliced into 1/2-inch pieces").at_position(4),
        item("Celery Rib").with_quantity(1.0).with_note("sliced into 1/2-inch pieces").at_position(5),
        item("Onions").with_quantity(2.5).with_unit("lbs").with_note("halved and cut into 1-inch pieces").at_position(6),
        item("Tomato Paste").with_quantity(2.0).with_unit("Tbsp").at_position(7),
        item("White Wine").with_quantity(1.0).with_unit("Cup").with_note("dry").at_position(8),
        item("Marjarom").with_quantity(2.0).with_unit("Tbsp").with_note("fresh -- you may substitute Oregano").at_position(9),
        item("Rigatoni").with_quantity(1.0).with_unit("lb").at_position(10),
        item("Pecorino Romano cheese").with_quantity(1.0).with_unit("oz").with_note("grated").at_position(11),
    ])
    .with_instructions(vec![
        Instruction::at(1, "1. Sprinkle beef with 1 teaspoon salt and 1/2 teaspoon pepper and set aside. Place oven rack on lower-middle position and heat oven to 300 degrees."),
        Instruction::at(2, "2. Grind pancetta and salami in food processor until a paste forms, about 30 seconds. Add carrot and celery process again until a paste forms, scraping down sides of bowl as needed. Transfer the resulting to Dutch oven and set aside. Pulse onions in processor in 2 batches, until finely diced."),
        Instruction::at(3, "3. Cook pancetta mixture over medium heat, stirring frequently, until fat is rendered and fond begins to form on bottom of pot, about 5 minutes. Add tomato paste and cook, stirring constantly, until browned. Stir in 2 cups water, scraping up any browned bits. Stir in onions and bring to boil. Stir in 1/2 cup wine and 1 tablespoon marjoram. Add beef and push into onions to ensure that it is submerged. Transfer to oven and cook, uncovered, until beef is fully tender, 2 to 2 1/2 hours."),
        Instruction::at(4, "4. Transfer beef to carving board. Place pot over medium heat and cook, stirring frequently, until mixture is almost completely dry. Stir in remaining 1/2 cup wine and cook for 2 minutes, stirring occasionally. Using 2 forks, shred beef into bite-size pieces. Stir beef and remaining 1 tablespoon marjoram into sauce and season with salt and pepper to taste. Remove from heat, cover, and keep warm."),
        Instruction::at(5, "5. Bring 4 quarts water to boil in large pot. Add rigatoni and 2 tablespoons salt and cook, stirring often, until just al dente. Drain rigatoni and add to warm sauce. Add Pecorino and stir vigorously over low heat until sauce is slightly thickened and rigatoni is fully tender, 1 to 2 minutes. Serve, passing extra Pecorino separately."),
    ]);
    recipe.thumbnail_url =
        thumbnail("https://education-jrp.s3.amazonaws.com/RecipeImages/NeopolitanRagu.jpg");
    recipe
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use recipebox_model::format_ingredient_line;

    fn by_name(name: &str) -> Recipe {
        preview_recipes()
            .into_iter()
            .find(|r| r.name == name)
            .unwrap()
    }

    #[test]
    fn four_recipes_with_thumbnails() {
        let recipes = preview_recipes();
        assert_eq!(recipes.len(), 4);
        assert!(recipes.iter().all(|r| r.thumbnail_url.is_some()));
        assert!(recipes.iter().all(|r| r.last_prepared_at.is_none()));
    }

    #[test]
    fn gong_bao_instructions_sorted() {
        let recipe = by_name("Gong Bao Chicken With Peanuts");
        let positions: Vec<_> = recipe.instructions().iter().map(|i| i.position).collect();
        assert_eq!(positions, (1..=6).map(Some).collect::<Vec<_>>());
        assert!(recipe.instructions()[1].instruction_text.starts_with("Peel and thinly slice"));
    }

    #[test]
    fn gong_bao_sections() {
        let recipe = by_name("Gong Bao Chicken With Peanuts");
        assert!(recipe.unsectioned_ingredients().is_empty());

        let chicken: Vec<_> = recipe
            .ingredients_for_section("Chicken")
            .into_iter()
            .map(|ri| format_ingredient_line(ri, 1.0))
            .collect();
        assert_eq!(
            chicken,
            vec![
                "2.0 boneless chicken breasts",
                "3.0 cloves garlic",
                "An equivalent amount of ginger",
                "5.0 spring onions",
                "A handful of dried chiles",
                "2.0 Tbsp cooking oil",
                "1.0 tsp Sichuan Pepper",
                "75.0 grams roasted peanuts",
            ]
        );

        let sauce = recipe.ingredients_for_section("Sauce");
        assert_eq!(sauce.first().map(|ri| ri.name()), Some("sugar"));
        assert_eq!(sauce.last().map(|ri| ri.name()), Some("chicken stock"));
    }

    #[test]
    fn dry_fried_mixes_sectioned_and_top_level() {
        let recipe = by_name("Dry-fried Green Beans");
        assert_eq!(recipe.unsectioned_ingredients().len(), 5);
        assert_eq!(recipe.ingredients_for_section("Sauce").len(), 8);
        assert_eq!(recipe.ingredients_for_section("Aromatics").len(), 4);
        assert_eq!(recipe.section_labels, vec!["Sauce", "Aromatics"]);
    }

    #[test]
    fn cuisines_cover_variants() {
        assert_eq!(by_name("Green Beans with Miso Butter").cuisine.label(), "Japanese");
        assert_eq!(
            by_name("Rigatoni with Beef and Onion Ragu").cuisine.label(),
            "Italian, pair with taurisi"
        );
    }
}
