//! Classification activity with sequential presentation: one draggable
//! (or tap-selectable) item at a time, dropped into one of the authored
//! categories, with immediate per-item feedback and a running counter.

use super::ScriptBundle;
use crate::context::Context;
use momento_model::{markers, ClassifyItem};
use serde::Serialize;

#[derive(Serialize)]
struct JsItem<'a> {
    texto: &'a str,
    categoria: usize,
}

pub fn markup(categories: &[String]) -> String {
    let mut ctx = Context::new();
    ctx.add_line(&format!(
        "<div class=\"{}\">",
        markers::DRAG_CLASSIFY_CONTAINER_CLASS
    ));
    ctx.indent();

    ctx.add_line(&format!("<div id=\"{}\"></div>", markers::DRAG_PROGRESS_ID));
    ctx.add_line(&format!(
        "<div id=\"{}\" draggable=\"true\"></div>",
        markers::DRAG_ITEM_ID
    ));

    ctx.add_line(&format!("<div id=\"{}\">", markers::DRAG_CATEGORIES_ID));
    ctx.indent();
    for (i, category) in categories.iter().enumerate() {
        ctx.add_line(&format!("<div class=\"categoria\" data-categoria=\"{}\">", i));
        ctx.indent();
        ctx.add_line(&format!("<h3>{}</h3>", category));
        ctx.add_line("<div class=\"categoria-items\"></div>");
        ctx.dedent();
        ctx.add_line("</div>");
    }
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.add_line(&format!("<div id=\"{}\"></div>", markers::DRAG_FEEDBACK_ID));
    ctx.add_line(&format!(
        "<button id=\"{}\" type=\"button\" hidden>Reiniciar</button>",
        markers::DRAG_RESET_ID
    ));

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.get_output()
}

pub fn generate(items: &[ClassifyItem]) -> ScriptBundle {
    let js_items: Vec<JsItem> = items
        .iter()
        .map(|i| JsItem {
            texto: &i.text,
            categoria: i.category,
        })
        .collect();
    let items_json = serde_json::to_string(&js_items).unwrap_or_else(|_| "[]".to_string());

    let mut js = String::new();
    js.push_str("(function () {\n");
    js.push_str(&format!("  var items = {};\n", items_json));
    js.push_str(JS_MACHINE);
    js.push_str("})();\n");

    ScriptBundle {
        css: CSS.to_string(),
        js,
    }
}

const JS_MACHINE: &str = r#"  var itemActual = document.getElementById('item-actual');
  var categorias = document.getElementById('categorias-container');
  var progreso = document.getElementById('clasificar-progreso');
  var feedback = document.getElementById('clasificar-feedback');
  var btnReiniciar = document.getElementById('clasificar-reset');

  var indice = 0;
  var correctas = 0;

  function mostrarItem() {
    if (indice >= items.length) {
      itemActual.hidden = true;
      var porcentaje = Math.round((correctas / items.length) * 100);
      feedback.textContent = 'Actividad completada: ' + correctas + ' de ' +
        items.length + ' clasificaciones correctas (' + porcentaje + '%).';
      btnReiniciar.hidden = false;
      return;
    }
    itemActual.hidden = false;
    itemActual.textContent = items[indice].texto;
    progreso.textContent = 'Ítem ' + (indice + 1) + ' de ' + items.length +
      ' · correctos: ' + correctas;
  }

  function clasificar(zona) {
    var elegida = parseInt(zona.getAttribute('data-categoria'), 10);
    var item = items[indice];
    var bucket = zona.querySelector('.categoria-items');
    var nodo = document.createElement('div');
    nodo.className = 'item-clasificado';
    nodo.textContent = item.texto;
    bucket.appendChild(nodo);

    if (elegida === item.categoria) {
      correctas++;
      nodo.classList.add('clasificado-correcto');
      feedback.textContent = '¡Correcto!';
    } else {
      nodo.classList.add('clasificado-incorrecto');
      feedback.textContent = 'Incorrecto.';
    }

    indice++;
    mostrarItem();
  }

  itemActual.addEventListener('dragstart', function (e) {
    e.dataTransfer.setData('text/plain', String(indice));
  });

  Array.prototype.forEach.call(
    categorias.querySelectorAll('.categoria'),
    function (zona) {
      zona.addEventListener('dragover', function (e) { e.preventDefault(); });
      zona.addEventListener('drop', function (e) {
        e.preventDefault();
        if (indice < items.length) { clasificar(zona); }
      });
      // Tap fallback: the visible item is always the selected one.
      zona.addEventListener('click', function () {
        if (indice < items.length) { clasificar(zona); }
      });
    });

  btnReiniciar.addEventListener('click', function () {
    indice = 0;
    correctas = 0;
    Array.prototype.forEach.call(
      categorias.querySelectorAll('.categoria-items'),
      function (bucket) { bucket.innerHTML = ''; });
    feedback.textContent = '';
    btnReiniciar.hidden = true;
    mostrarItem();
  });

  mostrarItem();
"#;

const CSS: &str = r#".drag-clasificar-actividad {
  padding: 1rem;
}
#item-actual {
  display: inline-block;
  margin: 0.5rem 0;
  padding: 10px 18px;
  border: 2px dashed #3a5bd9;
  border-radius: 6px;
  background: #fff;
  cursor: grab;
  font-weight: 600;
}
#categorias-container {
  display: flex;
  gap: 1rem;
  margin-top: 0.75rem;
}
#categorias-container .categoria {
  flex: 1;
  min-height: 140px;
  border: 1px solid #b5b8c4;
  border-radius: 8px;
  padding: 0.5rem;
}
#categorias-container .item-clasificado {
  margin: 4px 0;
  padding: 4px 8px;
  border-radius: 4px;
}
#categorias-container .clasificado-correcto {
  background: #dff2e5;
}
#categorias-container .clasificado-incorrecto {
  background: #fbe3e4;
}
#clasificar-progreso {
  font-size: 0.9rem;
  color: #555a6e;
}
#clasificar-feedback {
  min-height: 1.5rem;
  margin: 0.5rem 0;
  font-weight: 600;
}
#clasificar-reset {
  padding: 6px 18px;
  border: none;
  border-radius: 4px;
  background: #3a5bd9;
  color: #fff;
  cursor: pointer;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> (Vec<String>, Vec<ClassifyItem>) {
        (
            vec!["Frutas".to_string(), "Verduras".to_string()],
            vec![
                ClassifyItem {
                    text: "Manzana".to_string(),
                    category: 0,
                },
                ClassifyItem {
                    text: "Zanahoria".to_string(),
                    category: 1,
                },
            ],
        )
    }

    #[test]
    fn test_markup_categories_and_hooks() {
        let (categories, _) = data();
        let html = markup(&categories);
        assert!(html.contains("drag-clasificar-actividad"));
        assert!(html.contains("id=\"item-actual\""));
        assert!(html.contains("data-categoria=\"1\""));
        assert!(html.contains("<h3>Frutas</h3>"));
        // Items are presented sequentially from the script, not rendered.
        assert!(!html.contains("Manzana"));
    }

    #[test]
    fn test_items_embedded_with_correct_category() {
        let (_, items) = data();
        let bundle = generate(&items);
        assert!(bundle.js.contains("\"texto\":\"Manzana\",\"categoria\":0"));
        assert!(bundle.js.contains("\"texto\":\"Zanahoria\",\"categoria\":1"));
    }

    #[test]
    fn test_sequential_machine() {
        let (_, items) = data();
        let bundle = generate(&items);
        assert!(bundle.js.contains("var indice = 0;"));
        assert!(bundle.js.contains("indice++;"));
        assert!(bundle.js.contains("Actividad completada"));
        assert!(bundle.js.contains("Ítem ' + (indice + 1)"));
    }

    #[test]
    fn test_reset_restores_first_item() {
        let (_, items) = data();
        let bundle = generate(&items);
        assert!(bundle.js.contains("indice = 0;"));
        assert!(bundle.js.contains("bucket.innerHTML = ''"));
    }
}
