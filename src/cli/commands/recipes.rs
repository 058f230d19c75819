use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recipes;
use crate::errors::AppResult;
use crate::models::recipe::Recipe;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recipes { category, show } = cmd {
        if let Some(id) = show {
            print_recipe(recipes::find(id)?);
            return Ok(());
        }

        let list: Vec<&Recipe> = match category {
            Some(c) => recipes::by_category(c),
            None => recipes::all().iter().collect(),
        };

        if list.is_empty() {
            info(format!(
                "No recipes in this category. Available: {}",
                recipes::categories().join(", ")
            ));
            return Ok(());
        }

        header("食谱推荐");
        println!("{GREY}根据营养均衡原则为您推荐健康食谱{RESET}\n");

        let mut table = Table::new(vec![
            Column::left("ID"),
            Column::left("名称"),
            Column::left("分类"),
            Column::left("难度"),
            Column::right("时间"),
            Column::right("kcal"),
            Column::right("蛋白质"),
            Column::right("碳水"),
            Column::right("脂肪"),
            Column::right("份量"),
        ])
        .with_separator(cfg.separator());

        for r in list {
            table.add_row(vec![
                r.id.to_string(),
                r.name.to_string(),
                r.category.to_string(),
                r.difficulty.label().to_string(),
                format!("{}分钟", r.time),
                r.calories.to_string(),
                format!("{}g", r.protein),
                format!("{}g", r.carbs),
                format!("{}g", r.fat),
                format!("{}人份", r.servings),
            ]);
        }
        print!("{}", table.render());
        println!("\n{GREY}Use --show ID to see ingredients and steps.{RESET}");
    }

    Ok(())
}

fn print_recipe(r: &Recipe) {
    header(format!("{} ({})", r.name, r.category));
    println!(
        "⏱ {}分钟  🔥 {} kcal  👥 {}人份  难度: {}",
        r.time,
        r.calories,
        r.servings,
        r.difficulty.label()
    );
    println!(
        "蛋白质 {}g | 碳水 {}g | 脂肪 {}g\n",
        r.protein, r.carbs, r.fat
    );

    println!("{}", bold("食材"));
    for ingredient in r.ingredients {
        println!("  • {}", ingredient);
    }

    println!("\n{}", bold("步骤"));
    for (idx, step) in r.steps.iter().enumerate() {
        println!("  {}. {}", idx + 1, step);
    }
}
