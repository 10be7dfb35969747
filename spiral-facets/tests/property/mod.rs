mod facet_properties;
